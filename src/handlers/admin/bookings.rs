use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::auth::{authorize, Capability, Session};
use crate::error::ApiError;
use crate::handlers::BOOKINGS_COLLECTION;
use crate::middleware::{ApiResponse, ApiResult};
use crate::model::{Booking, BookingStatus};
use crate::state::AppState;
use crate::validation::schemas;

/// GET /api/admin/bookings (read)
pub async fn list_bookings(
    State(state): State<AppState>,
    session: Session,
) -> ApiResult<Vec<Booking>> {
    authorize(&session, Capability::Read)?;
    let bookings: Vec<Booking> = state.store.collection(BOOKINGS_COLLECTION)?;
    Ok(ApiResponse::success(bookings))
}

/// GET /api/admin/bookings/:id (read)
pub async fn get_booking(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> ApiResult<Booking> {
    authorize(&session, Capability::Read)?;
    let bookings: Vec<Booking> = state.store.collection(BOOKINGS_COLLECTION)?;

    bookings
        .into_iter()
        .find(|b| b.id == id)
        .map(ApiResponse::success)
        .ok_or_else(|| ApiError::not_found("Booking not found"))
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookingRequest {
    pub status: Option<BookingStatus>,
    pub notes: Option<String>,
    pub preferred_date: Option<String>,
}

/// PUT /api/admin/bookings/:id (write)
pub async fn update_booking(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateBookingRequest>,
) -> ApiResult<Booking> {
    authorize(&session, Capability::Write)?;

    let mut bookings: Vec<Booking> = state.store.collection(BOOKINGS_COLLECTION)?;
    let Some(booking) = bookings.iter_mut().find(|b| b.id == id) else {
        return Err(ApiError::not_found("Booking not found"));
    };

    if let Some(status) = body.status {
        booking.status = status;
    }
    if let Some(notes) = body.notes {
        booking.notes = Some(notes);
    }
    if let Some(preferred_date) = body.preferred_date {
        if !schemas::valid_booking_date(&preferred_date) {
            let mut errors = BTreeMap::new();
            errors.insert("preferred_date".to_string(), "Invalid format".to_string());
            return Err(ApiError::validation(errors));
        }
        booking.preferred_date = preferred_date;
    }

    let updated = booking.clone();
    state.store.replace(BOOKINGS_COLLECTION, &bookings)?;
    Ok(ApiResponse::success(updated))
}
