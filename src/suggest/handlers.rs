use super::types::{SuggestRequest, Suggestion};
use crate::AppState;
use axum::{Json, extract::State};
use tracing::debug;

/// Advisory suggestion endpoint. Always answers 200: provider failures are
/// converted into the filename fallback inside the service, so a broken
/// vision endpoint never blocks the manual upload path.
#[axum::debug_handler]
pub async fn suggest_handler(
    State(app_state): State<AppState>,
    Json(request): Json<SuggestRequest>,
) -> Json<Suggestion> {
    let suggestion = app_state.suggestions.suggest(&request).await;
    debug!(
        filename = %request.filename,
        category = %suggestion.category,
        confidence = suggestion.confidence,
        source = ?suggestion.source,
        "suggestion produced"
    );
    Json(suggestion)
}
