//! HTTP server implementation

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use super::handlers::{create_album, delete_album, get_album, list_albums, update_album, AppState};
use super::WebConfig;

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/albums", get(list_albums).post(create_album))
        .route(
            "/albums/:id",
            get(get_album).put(update_album).delete(delete_album),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Run the web server
pub async fn run_web_server(config: &WebConfig, state: AppState) -> anyhow::Result<()> {
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    info!("Album API available at http://{}/albums", config.addr);

    axum::serve(listener, app).await?;

    Ok(())
}
