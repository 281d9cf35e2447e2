//! # Domain Layer
//!
//! Core types and the responder error taxonomy.
//! This layer is independent of external frameworks and transport.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
