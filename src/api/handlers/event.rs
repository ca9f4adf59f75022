use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreateEventRequest, UpdateEventRequest};
use crate::domain::models::event::{Event, NewEventParams};
use crate::error::AppError;
use crate::state::AppState;

pub async fn create_event(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    info!("Creating event: {}", payload.title);

    let draft = Event::new(NewEventParams {
        title: payload.title,
        description: payload.description,
        overview: payload.overview,
        image: payload.image,
        venue: payload.venue,
        location: payload.location,
        date: payload.date,
        time: payload.time,
        mode: payload.mode,
        audience: payload.audience,
        organizer: payload.organizer,
        agenda: payload.agenda,
        tags: payload.tags,
    });

    let created = state.event_repo.create(&draft).await?;
    Ok(Json(created))
}

pub async fn list_events(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let events = state.event_repo.list().await?;
    Ok(Json(events))
}

pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event = state
        .event_repo
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Event '{}' not found", slug)))?;

    Ok(Json(event))
}

pub async fn update_event(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Json(payload): Json<UpdateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut event = state
        .event_repo
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".into()))?;

    if let Some(val) = payload.title { event.title = val; }
    if let Some(val) = payload.description { event.description = val; }
    if let Some(val) = payload.overview { event.overview = val; }
    if let Some(val) = payload.image { event.image = val; }
    if let Some(val) = payload.venue { event.venue = val; }
    if let Some(val) = payload.location { event.location = val; }
    if let Some(val) = payload.date { event.date = val; }
    if let Some(val) = payload.time { event.time = val; }
    if let Some(val) = payload.mode { event.mode = val; }
    if let Some(val) = payload.audience { event.audience = val; }
    if let Some(val) = payload.organizer { event.organizer = val; }
    if let Some(val) = payload.agenda { event.agenda = val; }
    if let Some(val) = payload.tags { event.tags = val; }

    let updated = state.event_repo.update(&event).await?;
    info!("Event updated: {}", updated.slug);
    Ok(Json(updated))
}
