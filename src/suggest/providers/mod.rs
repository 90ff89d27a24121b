pub mod http;
pub mod null;

use super::error::SuggestError;
use super::types::{RawSuggestion, SuggestRequest};
use crate::VisionConfig;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait VisionProvider: Send + Sync {
    async fn analyze(&self, request: &SuggestRequest) -> Result<RawSuggestion, SuggestError>;
    fn name(&self) -> &str;
}

pub type DynVisionProvider = Arc<dyn VisionProvider>;

pub fn create_provider(config: &VisionConfig) -> Result<DynVisionProvider, SuggestError> {
    match &config.endpoint {
        Some(endpoint) => {
            let endpoint = url::Url::parse(endpoint)
                .map_err(|e| SuggestError::InvalidEndpoint(format!("{}: {}", endpoint, e)))?;
            Ok(Arc::new(http::HttpVisionProvider::new(
                endpoint,
                config.api_key.clone(),
                std::time::Duration::from_secs(config.timeout_seconds),
            )?))
        }
        None => Ok(Arc::new(null::NullVisionProvider::new())),
    }
}
