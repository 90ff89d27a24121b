use serde::{Deserialize, Serialize};

/// Closed set of gallery categories. Every stored item belongs to exactly
/// one of these; anything else is rejected at validation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    EntireVilla,
    FamilySuite,
    GroupRoom,
    TripleRoom,
    DiningArea,
    PoolDeck,
    LakeGarden,
    RoofGarden,
    FrontGarden,
    KoggalaLake,
    Excursions,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 11] = [
        Category::EntireVilla,
        Category::FamilySuite,
        Category::GroupRoom,
        Category::TripleRoom,
        Category::DiningArea,
        Category::PoolDeck,
        Category::LakeGarden,
        Category::RoofGarden,
        Category::FrontGarden,
        Category::KoggalaLake,
        Category::Excursions,
    ];

    /// Wire value used in URLs, stored items, and the admin form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::EntireVilla => "entire-villa",
            Category::FamilySuite => "family-suite",
            Category::GroupRoom => "group-room",
            Category::TripleRoom => "triple-room",
            Category::DiningArea => "dining-area",
            Category::PoolDeck => "pool-deck",
            Category::LakeGarden => "lake-garden",
            Category::RoofGarden => "roof-garden",
            Category::FrontGarden => "front-garden",
            Category::KoggalaLake => "koggala-lake",
            Category::Excursions => "excursions",
        }
    }

    /// Human-readable label for dropdowns and page headings.
    pub fn label(&self) -> &'static str {
        match self {
            Category::EntireVilla => "Entire Villa",
            Category::FamilySuite => "Family Suite",
            Category::GroupRoom => "Group Room",
            Category::TripleRoom => "Triple Room",
            Category::DiningArea => "Dining Area",
            Category::PoolDeck => "Pool Deck",
            Category::LakeGarden => "Lake Garden",
            Category::RoofGarden => "Roof Garden",
            Category::FrontGarden => "Front Garden",
            Category::KoggalaLake => "Koggala Lake",
            Category::Excursions => "Excursions",
        }
    }

    pub fn parse(value: &str) -> Option<Category> {
        let value = value.trim();
        Category::ALL.iter().copied().find(|c| c.as_str() == value)
    }

    /// Property-specific tag synonyms folded into every item's tag set.
    pub fn tag_synonyms(&self) -> &'static [&'static str] {
        match self {
            Category::EntireVilla => &["entire villa", "whole property", "exclusive hire"],
            Category::FamilySuite => &["family suite", "master suite", "lake view room"],
            Category::GroupRoom => &["group room", "shared room", "group stay"],
            Category::TripleRoom => &["triple room", "twin room", "guest room"],
            Category::DiningArea => &["dining area", "dining", "sri lankan cuisine"],
            Category::PoolDeck => &["pool deck", "infinity pool", "poolside"],
            Category::LakeGarden => &["lake garden", "lakefront", "garden"],
            Category::RoofGarden => &["roof garden", "rooftop", "panoramic views"],
            Category::FrontGarden => &["front garden", "tropical landscaping", "garden"],
            Category::KoggalaLake => &["koggala lake", "lake", "boat rides"],
            Category::Excursions => &["excursions", "local tours", "adventures"],
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One registry entry as served to the admin UI.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryEntry {
    pub value: &'static str,
    pub label: &'static str,
}

/// Registry listing in display order.
pub fn list_categories() -> Vec<CategoryEntry> {
    Category::ALL
        .iter()
        .map(|c| CategoryEntry {
            value: c.as_str(),
            label: c.label(),
        })
        .collect()
}
