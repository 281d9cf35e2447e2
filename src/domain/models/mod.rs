mod conversation;

pub use conversation::*;
