//! HTTP layer
//!
//! Axum server with:
//! - Single dispatch endpoint routed on (method, action)
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses

pub mod error;
pub mod response;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, ServerConfig};
