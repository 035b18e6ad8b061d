//! tunewave: HTTP API for a music library
//!
//! Exposes tracks, playlists, and radio stations through a single
//! dispatch endpoint routed on the `action` query parameter, backed
//! by PostgreSQL.

pub mod db;
pub mod http;

pub use http::{build_router, run_server, ServerConfig};
