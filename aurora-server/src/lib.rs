//! HTTP binding for aurora-narrative — the JSON API a web front end calls.

pub mod config;
pub mod error;
pub mod routes;

pub use config::ServerConfig;
pub use routes::{router, AppState};
