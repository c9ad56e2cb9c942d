//! CRUD handlers for `/v1/events`.
//!
//! Each handler follows the same pipeline: parse and validate the body
//! (POST/PUT), invoke the service, map the entity to its response shape,
//! set the status. Validation failures become 400 before the service is
//! ever invoked; `NotFound` from the service becomes 404.

use crate::dto::{EventRequest, EventResponse};
use crate::error::EventError;
use crate::mapper;
use crate::model::EventId;
use crate::repository::EventRepository;
use crate::state::AppState;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::Utc;

/// Parse the body extraction outcome, then run field validation.
fn validated(
    payload: Result<Json<EventRequest>, JsonRejection>,
) -> Result<EventRequest, EventError> {
    let Json(request) = payload?;
    crate::validation::validate(&request, Utc::now().date_naive())
        .map_err(EventError::Validation)?;
    Ok(request)
}

/// `GET /v1/events` — list every event.
pub async fn get_all_events<R>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<EventResponse>>, EventError>
where
    R: EventRepository + Clone + 'static,
{
    let events = state.service.get_all_events().await?;
    Ok(Json(events.iter().map(mapper::to_response).collect()))
}

/// `GET /v1/events/{id}` — fetch one event, 404 if absent.
pub async fn get_event_by_id<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
) -> Result<Json<EventResponse>, EventError>
where
    R: EventRepository + Clone + 'static,
{
    let event = state.service.get_event_by_id(EventId(id)).await?;
    Ok(Json(mapper::to_response(&event)))
}

/// `POST /v1/events` — create an event, 201 with the assigned id.
pub async fn add_event<R>(
    State(state): State<AppState<R>>,
    payload: Result<Json<EventRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<EventResponse>), EventError>
where
    R: EventRepository + Clone + 'static,
{
    let request = validated(payload)?;
    let event = state.service.add_event(request).await?;
    Ok((StatusCode::CREATED, Json(mapper::to_response(&event))))
}

/// `PUT /v1/events/{id}` — fully replace an event's fields, 404 if absent.
pub async fn update_event<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
    payload: Result<Json<EventRequest>, JsonRejection>,
) -> Result<Json<EventResponse>, EventError>
where
    R: EventRepository + Clone + 'static,
{
    let request = validated(payload)?;
    let event = state.service.update_event(request, EventId(id)).await?;
    Ok(Json(mapper::to_response(&event)))
}

/// `DELETE /v1/events/{id}` — remove an event, 204 on success.
pub async fn delete_event<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, EventError>
where
    R: EventRepository + Clone + 'static,
{
    state.service.delete_event(EventId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
