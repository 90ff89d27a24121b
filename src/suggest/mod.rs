// Advisory AI metadata suggestions for gallery uploads. Every failure
// degrades to a filename heuristic; this subsystem never blocks a manual
// upload.
pub mod cache;
pub mod error;
pub mod fallback;
mod handlers;
pub mod providers;
pub mod types;

pub use cache::{BoundedSuggestionCache, CacheKey, SuggestionCache};
pub use error::SuggestError;
pub use handlers::suggest_handler;
pub use types::*;

use crate::gallery::Category;
use providers::DynVisionProvider;
use std::sync::Arc;
use tracing::warn;

pub const MAX_TITLE_CHARS: usize = 80;
pub const MAX_DESCRIPTION_CHARS: usize = 300;
pub const MAX_TAGS: usize = 10;

pub type SharedSuggestions = Arc<SuggestionService>;

pub struct SuggestionService {
    provider: DynVisionProvider,
    cache: Arc<dyn SuggestionCache>,
}

impl SuggestionService {
    pub fn new(provider: DynVisionProvider, cache: Arc<dyn SuggestionCache>) -> Self {
        Self { provider, cache }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Produce a suggestion for one file. Infallible by contract: provider
    /// errors are logged and converted into the filename fallback.
    pub async fn suggest(&self, request: &SuggestRequest) -> Suggestion {
        let key = CacheKey {
            filename: request.filename.clone(),
            file_size: request.file_size,
            modified_epoch: request.modified_epoch,
        };

        if let Some(hit) = self.cache.get(&key) {
            return hit;
        }

        let suggestion = match self.provider.analyze(request).await {
            Ok(raw) => coerce(raw, &request.filename),
            Err(e) => {
                warn!(
                    filename = %request.filename,
                    "vision analysis unavailable ({}), using filename fallback", e
                );
                fallback::suggestion_for(&request.filename)
            }
        };

        // Only real analyses are cached. A fallback answer means the
        // provider was unavailable, and a re-submit should try it again.
        if suggestion.source != SuggestionSource::FilenameFallback {
            self.cache.put(key, suggestion.clone());
        }
        suggestion
    }
}

/// Shape an untrusted vision response into an advisory suggestion: the
/// category is coerced into the registry, text fields are truncated, the
/// tag list is capped, and confidence is clamped into [0, 1].
fn coerce(raw: RawSuggestion, filename: &str) -> Suggestion {
    let category = raw
        .suggested_category
        .as_deref()
        .and_then(coerce_category)
        .unwrap_or(Category::EntireVilla);

    let title = match raw.title.map(|t| truncate(&t, MAX_TITLE_CHARS)) {
        Some(t) if !t.is_empty() => t,
        _ => fallback::suggestion_for(filename).title,
    };

    let description = raw
        .description
        .map(|d| truncate(&d, MAX_DESCRIPTION_CHARS))
        .unwrap_or_default();

    let tags: Vec<String> = raw
        .tags
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .take(MAX_TAGS)
        .collect();

    Suggestion {
        category,
        title,
        description,
        tags,
        confidence: raw.confidence.unwrap_or(0.0).clamp(0.0, 1.0),
        source: SuggestionSource::Vision,
    }
}

/// Match a free-text category answer against the registry. Models tend to
/// answer in prose ("this looks like the pool-deck area"), so a substring
/// match on the wire value is accepted in either direction.
fn coerce_category(answer: &str) -> Option<Category> {
    let lower = answer.trim().to_lowercase();
    if lower.is_empty() {
        return None;
    }
    Category::ALL
        .iter()
        .copied()
        .find(|c| lower == c.as_str() || lower.contains(c.as_str()))
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.trim().chars().take(max_chars).collect()
}
