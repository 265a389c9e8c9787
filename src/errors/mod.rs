//! Centralized error handling module
//!
//! Library code returns [`AppResult`]; the binary converts to `anyhow` at the edge.

pub mod context;
pub mod types;

pub use context::ErrorContextExt;
pub use types::{AppError, AppResult};
