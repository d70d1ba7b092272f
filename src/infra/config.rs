//! Centralized configuration (environment variables + defaults).

use std::path::PathBuf;

pub const DEFAULT_CATALOG_PATH: &str = "data/filmes.csv";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Loads a `.env` file from the working directory, if present.
pub fn load_dotenv() {
    dotenv::dotenv().ok();
}

/// Path of the catalog CSV. `~` is expanded.
pub fn catalog_path() -> PathBuf {
    let raw = std::env::var("CATALOG_PATH").unwrap_or_else(|_| DEFAULT_CATALOG_PATH.to_string());
    PathBuf::from(shellexpand::tilde(&raw).into_owned())
}

/// Socket address the API server listens on.
pub fn bind_addr() -> String {
    std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
}

/// Tracing filter directive.
pub fn log_filter() -> String {
    std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string())
}
