//! Citygen Server - HTTP surface for the city generation pipeline.
//!
//! Exposes a single generation endpoint plus a liveness probe:
//! - `POST /generate`
//! - `GET /health`
//!
//! All generation logic lives in `citygen-orchestrator`; this crate only
//! validates the inbound prompt, applies CORS and maps outcomes to HTTP.

pub mod commands;
pub mod config;
pub mod server;
pub mod types;

pub use config::ServerConfig;
pub use server::{build_cors, configure, serve, AppState};
