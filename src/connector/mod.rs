//! # Connector Layer
//!
//! External integrations implementing application interfaces — currently
//! the Maritaca HTTP chat client.

pub mod adapter;

pub use adapter::*;
