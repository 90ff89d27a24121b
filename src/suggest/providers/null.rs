use super::VisionProvider;
use crate::suggest::error::SuggestError;
use crate::suggest::types::{RawSuggestion, SuggestRequest};
use async_trait::async_trait;
use tracing::info;

/// Provider used when no vision endpoint is configured. Always reports the
/// endpoint as unavailable, which sends every request down the filename
/// fallback path.
pub struct NullVisionProvider;

impl NullVisionProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NullVisionProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VisionProvider for NullVisionProvider {
    async fn analyze(&self, request: &SuggestRequest) -> Result<RawSuggestion, SuggestError> {
        info!(
            filename = %request.filename,
            "null vision provider - falling back to filename heuristics"
        );
        Err(SuggestError::MissingCredentials)
    }

    fn name(&self) -> &str {
        "Null Vision Provider (Filename Fallback Only)"
    }
}
