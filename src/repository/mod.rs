//! Persistence abstraction over the events table.
//!
//! The [`EventRepository`] trait is the seam between the service and the
//! store. [`PostgresEventRepository`] is the production implementation;
//! [`InMemoryEventRepository`] backs tests and DB-less local runs.

use crate::error::Result;
use crate::model::{Event, EventDraft, EventId};
use std::future::Future;

pub mod memory;
pub mod postgres;

pub use memory::InMemoryEventRepository;
pub use postgres::PostgresEventRepository;

/// Keyed collection of event rows.
///
/// Identifier assignment on insert is unique and never collides with an
/// existing id. Row order from [`find_all`](Self::find_all) is
/// store-defined.
pub trait EventRepository: Send + Sync {
    /// Returns every stored event.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::Database`](crate::EventError::Database) if the
    /// query fails.
    fn find_all(&self) -> impl Future<Output = Result<Vec<Event>>> + Send;

    /// Looks up an event by id.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::Database`](crate::EventError::Database) if the
    /// query fails. A missing row is `Ok(None)`, not an error.
    fn find_by_id(&self, id: EventId) -> impl Future<Output = Result<Option<Event>>> + Send;

    /// Reports whether an event with this id exists.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::Database`](crate::EventError::Database) if the
    /// query fails.
    fn exists_by_id(&self, id: EventId) -> impl Future<Output = Result<bool>> + Send;

    /// Persists a new event, returning it with the store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::Database`](crate::EventError::Database) if the
    /// insert fails.
    fn insert(&self, draft: EventDraft) -> impl Future<Output = Result<Event>> + Send;

    /// Persists changes to an existing event, returning the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::Database`](crate::EventError::Database) if the
    /// update fails. Callers verify existence first.
    fn update(&self, event: &Event) -> impl Future<Output = Result<Event>> + Send;

    /// Removes the row with this id. Removing an absent id is a no-op;
    /// callers are responsible for existence checks.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::Database`](crate::EventError::Database) if the
    /// delete fails.
    fn delete_by_id(&self, id: EventId) -> impl Future<Output = Result<()>> + Send;
}
