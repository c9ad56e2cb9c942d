//! Application state shared across HTTP handlers.

use crate::repository::EventRepository;
use crate::service::EventService;

/// State handed to every handler, generic over the repository so tests can
/// run against the in-memory store.
#[derive(Clone)]
pub struct AppState<R> {
    /// The event service.
    pub service: EventService<R>,
}

impl<R: EventRepository + Clone> AppState<R> {
    /// Build the state from a repository.
    pub fn new(repository: R) -> Self {
        Self {
            service: EventService::new(repository),
        }
    }
}
