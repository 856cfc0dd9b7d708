//! Session state: who is logged in, persisted across reloads.

mod context;
mod storage;

pub use context::*;
pub use storage::*;
