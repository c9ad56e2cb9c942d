//! HTTP/JSON CRUD service for event records.
//!
//! The whole service is one pipeline: validate the inbound request, map it
//! to a persisted row, and serialize the row back into a response object.
//!
//! # Request Flow
//!
//! 1. **HTTP request** arrives at an Axum handler
//! 2. **Parse and validate** the body (POST/PUT) — 400 on failure, before
//!    any persistence call
//! 3. **Invoke** the [`EventService`] operation
//! 4. **Persist** through an [`EventRepository`] (PostgreSQL in production,
//!    in-memory in tests)
//! 5. **Map** the entity to its response shape and set the status
//!
//! # Layers
//!
//! - [`validation`] — declarative per-field request constraints
//! - [`mapper`] — explicit request ↔ entity ↔ response conversions
//! - [`repository`] — persistence over the `events` table
//! - [`service`] — fetch-or-404, create, update-by-merge, delete-or-404
//! - [`handlers`] / [`router`] — six routes under `/v1/events`

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod model;
pub mod repository;
pub mod router;
pub mod service;
pub mod state;
pub mod validation;

pub use config::Config;
pub use dto::{EventRequest, EventResponse};
pub use error::{EventError, Result};
pub use model::{Event, EventDraft, EventId};
pub use repository::{EventRepository, InMemoryEventRepository, PostgresEventRepository};
pub use router::event_router;
pub use service::EventService;
pub use state::AppState;
