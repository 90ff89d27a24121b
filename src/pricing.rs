// Room catalog and direct-booking rates. Rates listed on third-party
// platforms are the reference; booking direct earns a fixed percentage off.
use crate::AppState;
use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

/// The four bookable units, keyed by the property's room codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomType {
    #[serde(rename = "KLV")]
    EntireVilla,
    #[serde(rename = "KLV1")]
    FamilySuite,
    #[serde(rename = "KLV3")]
    TripleRoom,
    #[serde(rename = "KLV6")]
    GroupRoom,
}

impl RoomType {
    pub const ALL: [RoomType; 4] = [
        RoomType::EntireVilla,
        RoomType::FamilySuite,
        RoomType::TripleRoom,
        RoomType::GroupRoom,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            RoomType::EntireVilla => "KLV",
            RoomType::FamilySuite => "KLV1",
            RoomType::TripleRoom => "KLV3",
            RoomType::GroupRoom => "KLV6",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RoomType::EntireVilla => "Entire Villa",
            RoomType::FamilySuite => "Master Family Suite",
            RoomType::TripleRoom => "Triple/Twin Room",
            RoomType::GroupRoom => "Group Room",
        }
    }

    pub fn capacity(&self) -> &'static str {
        match self {
            RoomType::EntireVilla => "Up to 18 guests",
            RoomType::FamilySuite => "6+ guests",
            RoomType::TripleRoom => "3+ guests per room",
            RoomType::GroupRoom => "6+ guests",
        }
    }

    /// Nightly rate as listed on third-party platforms, in whole USD.
    pub fn listed_rate(&self) -> u32 {
        match self {
            RoomType::EntireVilla => 431,
            RoomType::FamilySuite => 119,
            RoomType::TripleRoom => 70,
            RoomType::GroupRoom => 250,
        }
    }

    pub fn parse(value: &str) -> Option<RoomType> {
        let value = value.trim();
        RoomType::ALL.iter().copied().find(|r| r.code() == value)
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Direct-booking rate card with a configurable discount off the listed
/// third-party rates.
#[derive(Debug, Clone)]
pub struct RateCard {
    discount_percent: u8,
}

impl RateCard {
    pub fn new(discount_percent: u8) -> Self {
        Self {
            discount_percent: discount_percent.min(100),
        }
    }

    pub fn discount_percent(&self) -> u8 {
        self.discount_percent
    }

    pub fn direct_rate(&self, room: RoomType) -> u32 {
        let multiplier = f64::from(100 - self.discount_percent) / 100.0;
        (f64::from(room.listed_rate()) * multiplier).round() as u32
    }

    pub fn savings(&self, room: RoomType) -> u32 {
        room.listed_rate() - self.direct_rate(room)
    }
}

#[derive(Serialize)]
pub struct RoomRate {
    pub code: &'static str,
    pub name: &'static str,
    pub capacity: &'static str,
    pub listed_rate: u32,
    pub direct_rate: u32,
    pub savings: u32,
}

#[derive(Serialize)]
pub struct RoomsResponse {
    pub discount_percent: u8,
    pub rooms: Vec<RoomRate>,
}

#[axum::debug_handler]
pub async fn rooms_handler(State(app_state): State<AppState>) -> Json<RoomsResponse> {
    let rates = &app_state.rates;
    let rooms = RoomType::ALL
        .iter()
        .map(|room| RoomRate {
            code: room.code(),
            name: room.name(),
            capacity: room.capacity(),
            listed_rate: room.listed_rate(),
            direct_rate: rates.direct_rate(*room),
            savings: rates.savings(*room),
        })
        .collect();

    Json(RoomsResponse {
        discount_percent: rates.discount_percent(),
        rooms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_codes_round_trip() {
        for room in RoomType::ALL {
            assert_eq!(RoomType::parse(room.code()), Some(room));
        }
        assert_eq!(RoomType::parse("KLV9"), None);
    }

    #[test]
    fn fifteen_percent_off_a_hundred_is_eighty_five() {
        let card = RateCard::new(15);
        // Direct formula check independent of the catalog.
        assert_eq!((100.0f64 * 0.85).round() as u32, 85);
        assert_eq!(card.direct_rate(RoomType::EntireVilla), 366);
        assert_eq!(card.savings(RoomType::EntireVilla), 65);
    }

    #[test]
    fn zero_discount_means_listed_rate() {
        let card = RateCard::new(0);
        for room in RoomType::ALL {
            assert_eq!(card.direct_rate(room), room.listed_rate());
            assert_eq!(card.savings(room), 0);
        }
    }

    #[test]
    fn discount_is_capped_at_one_hundred() {
        let card = RateCard::new(200);
        assert_eq!(card.direct_rate(RoomType::TripleRoom), 0);
    }

    #[test]
    fn serde_uses_room_codes() {
        let json = serde_json::to_string(&RoomType::FamilySuite).unwrap();
        assert_eq!(json, "\"KLV1\"");
    }
}
