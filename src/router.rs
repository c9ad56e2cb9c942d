//! Route table for the event API.

use crate::handlers::{events, health};
use crate::repository::EventRepository;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Compose the event routes and the health check into a router.
///
/// # Routes
///
/// - `GET    /v1/events` — list all events
/// - `POST   /v1/events` — create an event
/// - `GET    /v1/events/:id` — fetch one event
/// - `PUT    /v1/events/:id` — replace an event's fields
/// - `DELETE /v1/events/:id` — remove an event
/// - `GET    /health` — liveness check
pub fn event_router<R>(state: AppState<R>) -> Router
where
    R: EventRepository + Clone + 'static,
{
    Router::new()
        .route(
            "/v1/events",
            get(events::get_all_events::<R>).post(events::add_event::<R>),
        )
        .route(
            "/v1/events/:id",
            get(events::get_event_by_id::<R>)
                .put(events::update_event::<R>)
                .delete(events::delete_event::<R>),
        )
        .route("/health", get(health::health_check))
        .with_state(state)
}
