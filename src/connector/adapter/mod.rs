mod maritaca_client;

pub use maritaca_client::*;
