use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::CreateBookingRequest;
use crate::domain::models::booking::Booking;
use crate::domain::services::normalize::require_email;
use crate::error::AppError;
use crate::state::AppState;

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    // Field-level check; the repository re-validates before the write.
    let email = require_email(&payload.email)?;

    let booking = Booking::new(payload.event_id, email);
    let created = state.booking_repo.create(&booking).await?;

    info!("Booking confirmed: {} for event {}", created.id, created.event_id);
    Ok(Json(created))
}

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event = state
        .event_repo
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".into()))?;

    let bookings = state.booking_repo.list_by_event(&event.id).await?;
    Ok(Json(bookings))
}
