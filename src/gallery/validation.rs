use super::categories::Category;
use super::tags;
use super::types::{GallerySubmission, MediaType, ValidSubmission};

/// Error messages shown inline in the admin form, one per violated rule.
const CATEGORY_ERROR: &str = "Category must be selected from the approved list";
const TITLE_ERROR: &str = "Title is required";

/// Validate an admin submission. Pure and synchronous: no I/O, no side
/// effects. On success the returned submission is trimmed, its category
/// resolved against the registry, and its tag set composed.
///
/// A category that is present but unknown gets the same error as an absent
/// one; a tags field containing only commas and whitespace is an empty tag
/// set, not an error. The image URL is optional: metadata can be prepared
/// before the upload finishes, and the store accepts records without one.
pub fn validate(submission: &GallerySubmission) -> Result<ValidSubmission, Vec<String>> {
    let mut errors = Vec::new();

    let category = submission
        .category
        .as_deref()
        .and_then(Category::parse);
    if category.is_none() {
        errors.push(CATEGORY_ERROR.to_string());
    }

    let title = submission
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty());
    if title.is_none() {
        errors.push(TITLE_ERROR.to_string());
    }

    let (Some(category), Some(title)) = (category, title) else {
        return Err(errors);
    };
    let title = title.to_string();

    let image_url = submission
        .image_url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .unwrap_or("")
        .to_string();

    let description = submission
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string);

    let user_tags = submission.tags.as_deref().unwrap_or("");
    let tags = tags::compose_tag_string(category, user_tags);

    Ok(ValidSubmission {
        category,
        title,
        description,
        tags,
        media_type: MediaType::from_filename(&image_url),
        image_url,
        featured: submission.featured,
        sort_order: submission.sort_order,
    })
}
