use super::categories::Category;

/// Brand and location tags present on every item regardless of category.
const BASE_TAGS: [&str; 2] = ["ko lake villa", "sri lanka"];

/// Merge the base brand tags, the category's synonym set, and the user's
/// free-text tags into one de-duplicated list.
///
/// De-duplication is case-insensitive and keeps the first-seen casing, so a
/// user tag that repeats a synonym with different capitalization does not
/// produce a second entry. The result is never empty.
pub fn compose_tags(category: Category, user_tags: &str) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut tags: Vec<String> = Vec::new();

    let mut push = |tag: &str| {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            return;
        }
        let folded = trimmed.to_lowercase();
        if !seen.contains(&folded) {
            seen.push(folded);
            tags.push(trimmed.to_string());
        }
    };

    for tag in BASE_TAGS {
        push(tag);
    }
    for tag in category.tag_synonyms() {
        push(tag);
    }
    for tag in user_tags.split(',') {
        push(tag);
    }

    tags
}

/// Comma-separated form used by the gallery store.
pub fn compose_tag_string(category: Category, user_tags: &str) -> String {
    compose_tags(category, user_tags).join(", ")
}
