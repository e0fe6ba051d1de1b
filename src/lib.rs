//! albumdb - a small in-memory album catalogue served over HTTP
//!
//! - `store` holds the albums and knows nothing about HTTP
//! - `web` maps HTTP routes onto store operations behind a shared lock

pub mod store;
pub mod web;

/// Re-export commonly used types
pub use store::{Album, AlbumStore};
pub use web::{ApiError, AppState, WebConfig};
