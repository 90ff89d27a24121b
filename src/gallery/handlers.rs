use super::{Category, GalleryError, GalleryItem, GalleryListQuery, GallerySubmission};
use crate::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Mutations require the admin session cookie issued by `/api/auth`.
fn require_admin(app_state: &AppState, headers: &HeaderMap) -> Result<(), GalleryError> {
    if crate::api::is_admin(headers, &app_state.config.app.session_secret) {
        Ok(())
    } else {
        Err(GalleryError::Unauthorized)
    }
}

#[axum::debug_handler]
pub async fn list_handler(
    State(app_state): State<AppState>,
    Query(query): Query<GalleryListQuery>,
) -> Result<Json<Vec<GalleryItem>>, GalleryError> {
    // An unknown ?category= filter matches nothing rather than erroring;
    // "all" is the admin UI's explicit no-filter value.
    let category = match query.category.as_deref() {
        None | Some("all") | Some("") => None,
        Some(raw) => match Category::parse(raw) {
            Some(c) => Some(c),
            None => return Ok(Json(Vec::new())),
        },
    };

    let items = app_state
        .gallery
        .list(category, query.featured.unwrap_or(false))
        .await?;
    Ok(Json(items))
}

#[axum::debug_handler]
pub async fn categories_handler() -> impl IntoResponse {
    Json(super::list_categories())
}

#[axum::debug_handler]
pub async fn create_handler(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    Json(submission): Json<GallerySubmission>,
) -> Result<(StatusCode, Json<GalleryItem>), GalleryError> {
    require_admin(&app_state, &headers)?;
    let item = app_state.gallery.create(&submission).await?;
    info!(id = item.id, category = %item.category, "gallery item created");
    Ok((StatusCode::CREATED, Json(item)))
}

#[axum::debug_handler]
pub async fn update_handler(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(submission): Json<GallerySubmission>,
) -> Result<Json<GalleryItem>, GalleryError> {
    require_admin(&app_state, &headers)?;
    let item = app_state.gallery.update(id, &submission).await?;
    info!(id = item.id, "gallery item updated");
    Ok(Json(item))
}

#[axum::debug_handler]
pub async fn delete_handler(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Result<StatusCode, GalleryError> {
    require_admin(&app_state, &headers)?;
    app_state.gallery.delete(id).await?;
    info!(id, "gallery item deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
pub struct BulkDeleteRequest {
    pub ids: Vec<i64>,
}

#[derive(Serialize)]
pub struct BulkDeleteResponse {
    pub removed: usize,
}

#[axum::debug_handler]
pub async fn bulk_delete_handler(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<BulkDeleteRequest>,
) -> Result<Json<BulkDeleteResponse>, GalleryError> {
    require_admin(&app_state, &headers)?;
    let removed = app_state.gallery.bulk_delete(&request.ids).await?;
    info!(
        requested = request.ids.len(),
        removed, "gallery bulk delete"
    );
    Ok(Json(BulkDeleteResponse { removed }))
}
