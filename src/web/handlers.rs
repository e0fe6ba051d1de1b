//! HTTP handlers for the album API

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::error::ApiError;
use super::json::PrettyJson;
use crate::store::{Album, AlbumStore};

/// Shared application state
pub type AppState = Arc<Mutex<AlbumStore>>;

/// Decode a request body as an album, whatever its content type
fn decode_album(body: &[u8]) -> Result<Album, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        let err = ApiError::from(e);
        warn!("Rejected album body: {}", err);
        err
    })
}

/// GET /albums - every album, sorted by id
pub async fn list_albums(State(store): State<AppState>) -> PrettyJson<Vec<Album>> {
    let store = store.lock().await;
    PrettyJson(store.list())
}

/// GET /albums/:id - a single album
pub async fn get_album(
    State(store): State<AppState>,
    Path(id): Path<String>,
) -> Result<PrettyJson<Album>, ApiError> {
    let store = store.lock().await;
    store
        .find_by_id(&id)
        .cloned()
        .map(PrettyJson)
        .ok_or(ApiError::NotFound)
}

/// POST /albums - append a new album
pub async fn create_album(
    State(store): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, PrettyJson<Album>), ApiError> {
    let album = decode_album(&body)?;
    debug!("Inserting album {}", album.id);

    let mut store = store.lock().await;
    let created = store.insert(album).clone();

    Ok((StatusCode::CREATED, PrettyJson(created)))
}

/// PUT /albums/:id - replace every album with this id
pub async fn update_album(
    State(store): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let replacement = decode_album(&body)?;

    let mut store = store.lock().await;
    let replaced = store.replace_by_id(&id, replacement);
    debug!("Replaced {} album(s) with id {}", replaced, id);

    Ok(StatusCode::OK)
}

/// DELETE /albums/:id - remove every album with this id
pub async fn delete_album(
    State(store): State<AppState>,
    Path(id): Path<String>,
) -> PrettyJson<Vec<Album>> {
    let mut store = store.lock().await;
    debug!("Deleting album {}", id);
    PrettyJson(store.delete_by_id(&id).to_vec())
}
