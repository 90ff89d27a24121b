use crate::gallery::Category;
use serde::{Deserialize, Serialize};

/// What the admin console sends when asking for metadata suggestions for a
/// freshly selected file.
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestRequest {
    pub filename: String,
    /// Base64-encoded file contents, passed through to the vision endpoint
    /// as an opaque payload.
    #[serde(default)]
    pub image_base64: String,
    #[serde(default)]
    pub file_size: u64,
    /// File modification time in seconds since the epoch, as reported by
    /// the browser. Part of the memoization key only.
    #[serde(default)]
    pub modified_epoch: u64,
}

/// Untrusted payload from the vision endpoint, before coercion.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSuggestion {
    #[serde(default)]
    pub suggested_category: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub confidence: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionSource {
    /// Produced by the vision endpoint.
    Vision,
    /// Guessed from the filename because the endpoint was unavailable.
    FilenameFallback,
}

/// Advisory metadata proposal. Never authoritative: the admin form is
/// pre-filled from it and the user may overwrite every field.
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub category: Category,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub confidence: f32,
    pub source: SuggestionSource,
}
