use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::error::ApiError;
use crate::handlers::BOOKINGS_COLLECTION;
use crate::middleware::{ApiResponse, ApiResult};
use crate::model::{Booking, BookingRequest};
use crate::state::AppState;
use crate::validation::schemas;

/// POST /api/bookings - public appointment request
///
/// Deliberately unauthenticated: bookings are submitted by clinic customers,
/// not staff. The server assigns id, pending status, and timestamp.
pub async fn create_booking(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> ApiResult<Booking> {
    let errors = schemas::booking().validate(&payload);
    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    let request: BookingRequest = serde_json::from_value(payload)
        .map_err(|e| ApiError::bad_request(format!("Malformed booking payload: {}", e)))?;

    let booking = Booking::from_request(request);

    let mut bookings: Vec<Booking> = state.store.collection(BOOKINGS_COLLECTION)?;
    bookings.push(booking.clone());
    state.store.replace(BOOKINGS_COLLECTION, &bookings)?;

    tracing::info!(booking_id = %booking.id, "booking received");
    Ok(ApiResponse::created(booking))
}
