// src/api/mod.rs
// HTTP API: handlers, wire types and error mapping

pub mod error;
pub mod http;
pub mod types;

pub use error::{ApiError, ApiResult};
pub use types::*;
