// Booking-intent surface: inquiry validation, night counting, date-range
// conflict checks, and the advisory card pre-check. Inquiries are relayed,
// not stored; the property follows up by email.
pub mod card;
mod handlers;

pub use handlers::booking_handler;

use crate::pricing::RoomType;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const NAME_ERROR: &str = "Guest name is required";
const EMAIL_ERROR: &str = "A valid email address is required";
const ROOM_ERROR: &str = "Room type must be one of the listed rooms";
const CHECK_IN_ERROR: &str = "Check-in date is required (YYYY-MM-DD)";
const CHECK_OUT_ERROR: &str = "Check-out date is required (YYYY-MM-DD)";
const DATE_ORDER_ERROR: &str = "Check-out must be after check-in";
const GUESTS_ERROR: &str = "Guest count must be at least 1";

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("booking validation failed: {0:?}")]
    Validation(Vec<String>),
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let BookingError::Validation(errors) = self;
        let body = serde_json::json!({
            "error": "Booking inquiry failed validation",
            "errors": errors,
        });
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// Raw booking-modal submission.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[serde(default)]
    pub guest_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub check_in: Option<String>,
    #[serde(default)]
    pub check_out: Option<String>,
    #[serde(default)]
    pub guests: Option<u32>,
    #[serde(default)]
    pub room_type: Option<String>,
    #[serde(default)]
    pub special_requests: Option<String>,
}

/// A validated inquiry ready to relay.
#[derive(Debug, Clone, Serialize)]
pub struct BookingInquiry {
    pub guest_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub room_type: RoomType,
    pub special_requests: Option<String>,
}

impl BookingInquiry {
    /// Stay length. The booking modal always charges at least one night
    /// even for same-day edge input that slipped past validation.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days().max(1)
    }
}

pub fn validate(request: &BookingRequest) -> Result<BookingInquiry, Vec<String>> {
    let mut errors = Vec::new();

    let guest_name = non_empty(request.guest_name.as_deref());
    if guest_name.is_none() {
        errors.push(NAME_ERROR.to_string());
    }

    // Enough to catch typos; real verification happens when we reply.
    let email = non_empty(request.email.as_deref()).filter(|e| {
        e.split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'))
    });
    if email.is_none() {
        errors.push(EMAIL_ERROR.to_string());
    }

    let check_in = parse_date(request.check_in.as_deref());
    if check_in.is_none() {
        errors.push(CHECK_IN_ERROR.to_string());
    }
    let check_out = parse_date(request.check_out.as_deref());
    if check_out.is_none() {
        errors.push(CHECK_OUT_ERROR.to_string());
    }
    if let (Some(check_in), Some(check_out)) = (check_in, check_out)
        && check_out <= check_in
    {
        errors.push(DATE_ORDER_ERROR.to_string());
    }

    let guests = request.guests.filter(|g| *g >= 1);
    if guests.is_none() {
        errors.push(GUESTS_ERROR.to_string());
    }

    let room_type = request.room_type.as_deref().and_then(RoomType::parse);
    if room_type.is_none() {
        errors.push(ROOM_ERROR.to_string());
    }

    let (Some(guest_name), Some(email), Some(check_in), Some(check_out), Some(guests), Some(room_type)) =
        (guest_name, email, check_in, check_out, guests, room_type)
    else {
        return Err(errors);
    };
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(BookingInquiry {
        guest_name,
        email,
        phone: non_empty(request.phone.as_deref()),
        check_in,
        check_out,
        guests,
        room_type,
        special_requests: non_empty(request.special_requests.as_deref()),
    })
}

/// Whether two half-open stay ranges [start, end) collide. Used by the
/// admin calendar to flag conflicting inquiries; a check-out on another
/// stay's check-in day is not a conflict.
pub fn ranges_overlap(
    a_start: NaiveDate,
    a_end: NaiveDate,
    b_start: NaiveDate,
    b_end: NaiveDate,
) -> bool {
    a_start < b_end && b_start < a_end
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value?.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> BookingRequest {
        BookingRequest {
            guest_name: Some("Amaya Perera".to_string()),
            email: Some("amaya@example.com".to_string()),
            check_in: Some("2026-09-10".to_string()),
            check_out: Some("2026-09-14".to_string()),
            guests: Some(4),
            room_type: Some("KLV1".to_string()),
            ..Default::default()
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn valid_inquiry_passes_with_night_count() {
        let inquiry = validate(&request()).unwrap();
        assert_eq!(inquiry.nights(), 4);
        assert_eq!(inquiry.room_type, RoomType::FamilySuite);
    }

    #[test]
    fn checkout_before_checkin_is_rejected() {
        let mut req = request();
        req.check_out = Some("2026-09-08".to_string());
        let errors = validate(&req).unwrap_err();
        assert_eq!(errors, vec![DATE_ORDER_ERROR.to_string()]);
    }

    #[test]
    fn same_day_checkout_is_rejected() {
        let mut req = request();
        req.check_out = req.check_in.clone();
        assert!(validate(&req).is_err());
    }

    #[test]
    fn missing_fields_accumulate_errors() {
        let errors = validate(&BookingRequest::default()).unwrap_err();
        assert_eq!(errors.len(), 6);
        assert!(errors[0].contains("name"));
    }

    #[test]
    fn bad_email_is_rejected() {
        let mut req = request();
        req.email = Some("not-an-email".to_string());
        let errors = validate(&req).unwrap_err();
        assert_eq!(errors, vec![EMAIL_ERROR.to_string()]);
    }

    #[test]
    fn unknown_room_code_is_rejected() {
        let mut req = request();
        req.room_type = Some("KLV9".to_string());
        assert!(validate(&req).is_err());
    }

    #[test]
    fn back_to_back_stays_do_not_overlap() {
        assert!(!ranges_overlap(
            date("2026-09-10"),
            date("2026-09-14"),
            date("2026-09-14"),
            date("2026-09-18"),
        ));
    }

    #[test]
    fn nested_and_partial_overlaps_are_detected() {
        assert!(ranges_overlap(
            date("2026-09-10"),
            date("2026-09-14"),
            date("2026-09-12"),
            date("2026-09-13"),
        ));
        assert!(ranges_overlap(
            date("2026-09-10"),
            date("2026-09-14"),
            date("2026-09-13"),
            date("2026-09-20"),
        ));
    }
}
