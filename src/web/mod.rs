//! Web interface module
//!
//! Exposes the album store as a small JSON API over HTTP.

mod error;
mod handlers;
mod json;
mod server;

pub use error::{ApiError, ErrorBody};
pub use handlers::AppState;
pub use json::PrettyJson;
pub use server::{build_router, run_web_server};

/// Web server configuration
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Address to listen on
    pub addr: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        WebConfig {
            addr: "127.0.0.1:8080".to_string(),
        }
    }
}
