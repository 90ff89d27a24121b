use super::types::{Suggestion, SuggestionSource};
use crate::gallery::Category;

/// Confidence reported for every filename-derived guess. Deliberately low
/// so the admin UI presents it as a weak hint.
pub const FALLBACK_CONFIDENCE: f32 = 0.5;

/// Keyword table checked in order; first substring match wins, so "suite"
/// must be tested before the broader "room".
const KEYWORDS: [(&str, Category); 7] = [
    ("pool", Category::PoolDeck),
    ("dining", Category::DiningArea),
    ("suite", Category::FamilySuite),
    ("room", Category::TripleRoom),
    ("garden", Category::FrontGarden),
    ("lake", Category::KoggalaLake),
    ("excursion", Category::Excursions),
];

pub fn guess_category(filename: &str) -> Category {
    let lower = filename.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, category)| *category)
        .unwrap_or(Category::EntireVilla)
}

/// Suggestion built without any network call, used whenever the vision
/// endpoint is unreachable or unconfigured.
pub fn suggestion_for(filename: &str) -> Suggestion {
    let category = guess_category(filename);
    Suggestion {
        category,
        title: title_from_filename(filename),
        description: format!("Auto-categorized as {} from the filename", category.label()),
        tags: vec![category.as_str().to_string(), "ko lake villa".to_string()],
        confidence: FALLBACK_CONFIDENCE,
        source: SuggestionSource::FilenameFallback,
    }
}

/// "pool_area_01.jpg" -> "Pool area 01".
fn title_from_filename(filename: &str) -> String {
    let stem = filename
        .rsplit('/')
        .next()
        .unwrap_or(filename)
        .split('.')
        .next()
        .unwrap_or(filename);
    let spaced: String = stem
        .chars()
        .map(|c| if c == '_' || c == '-' { ' ' } else { c })
        .collect();
    let spaced = spaced.trim();
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => "Untitled".to_string(),
    }
}
