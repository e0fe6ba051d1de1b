use albumdb::{web, AlbumStore, WebConfig};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize logging (RUST_LOG sets the level, info otherwise)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("albumdb starting...");

    // Server configuration
    let config = WebConfig::default();

    // Seed the store and share it between request handlers
    let store = AlbumStore::seeded();
    info!("Store seeded with {} albums", store.len());
    let state = Arc::new(Mutex::new(store));

    // Serve until the process is stopped
    if let Err(e) = web::run_web_server(&config, state).await {
        error!("Web server error: {}", e);
        std::process::exit(1);
    }
}
