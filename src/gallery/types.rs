use super::categories::Category;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

impl MediaType {
    /// Best-effort guess from the filename extension. Anything that is not
    /// recognizably a video is treated as an image.
    pub fn from_filename(filename: &str) -> MediaType {
        let mime = mime_guess::from_path(filename).first_or_octet_stream();
        if mime.type_() == mime_guess::mime::VIDEO {
            MediaType::Video
        } else {
            MediaType::Image
        }
    }
}

impl Default for MediaType {
    fn default() -> Self {
        MediaType::Image
    }
}

/// One gallery record as held by the remote store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: Category,
    /// Comma-separated tag list, the store's persisted representation.
    pub tags: String,
    #[serde(default)]
    pub media_type: MediaType,
    pub image_url: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub sort_order: i64,
}

/// Raw admin form submission before validation. All fields arrive as free
/// text; nothing here is trusted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GallerySubmission {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub sort_order: i64,
}

/// A submission that passed validation: category resolved against the
/// registry, title trimmed and non-empty, tags composed and de-duplicated.
#[derive(Debug, Clone, Serialize)]
pub struct ValidSubmission {
    pub category: Category,
    pub title: String,
    pub description: Option<String>,
    pub tags: String,
    pub image_url: String,
    pub media_type: MediaType,
    pub featured: bool,
    pub sort_order: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GalleryListQuery {
    pub category: Option<String>,
    pub featured: Option<bool>,
}
