//! Endpoint and Browser Bindings
//!
//! Remote calls to the task endpoint and the remembered-name store,
//! organized by concern.

mod tasks;
mod storage;

pub use tasks::*;
pub use storage::*;
