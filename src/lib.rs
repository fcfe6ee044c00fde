//! Library exports for reuse in integration tests.
/// Application directory helpers.
pub mod app_dirs;
/// TOML configuration loading and persistence.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
/// Shared HTTP agent and bounded response helpers.
pub mod http_client;
/// Logging setup.
pub mod logging;
/// Wire types and client for the query/verification service.
pub mod query_gateway;
