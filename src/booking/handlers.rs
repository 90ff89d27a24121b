use super::{BookingError, BookingRequest};
use crate::AppState;
use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use tracing::info;

#[derive(Serialize)]
pub struct BookingResponse {
    pub success: bool,
    pub booking_id: i64,
    pub nights: i64,
    pub total: u64,
    pub message: String,
}

/// Accept a booking inquiry from the public site. Validation mirrors the
/// gallery submission path: an ordered error list the form shows inline.
#[axum::debug_handler]
pub async fn booking_handler(
    State(app_state): State<AppState>,
    Json(request): Json<BookingRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), BookingError> {
    let inquiry = super::validate(&request).map_err(BookingError::Validation)?;

    let nights = inquiry.nights();
    let rate = app_state.rates.direct_rate(inquiry.room_type);
    // Validation guarantees nights >= 1, but the checkout date is otherwise
    // unbounded, so the total must not be computed in a narrow type.
    let total = u64::from(rate).saturating_mul(nights as u64);
    let booking_id = chrono::Utc::now().timestamp_millis();

    info!(
        booking_id,
        room = %inquiry.room_type,
        check_in = %inquiry.check_in,
        check_out = %inquiry.check_out,
        guests = inquiry.guests,
        nights,
        "booking inquiry received"
    );

    Ok((
        StatusCode::CREATED,
        Json(BookingResponse {
            success: true,
            booking_id,
            nights,
            total,
            message: "Booking inquiry submitted successfully".to_string(),
        }),
    ))
}
