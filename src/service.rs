//! Event service orchestration.
//!
//! The only place with any logic: fetch-or-not-found, create, update by
//! merge, delete-or-not-found. Requests reaching this layer are already
//! validated; each operation's persistence step is a single-row unit of
//! work, so concurrent updates to one id are last-write-wins.

use crate::dto::EventRequest;
use crate::error::{EventError, Result};
use crate::mapper;
use crate::model::{Event, EventId};
use crate::repository::EventRepository;

/// Orchestrates event operations over an [`EventRepository`].
#[derive(Clone)]
pub struct EventService<R> {
    repository: R,
}

impl<R: EventRepository> EventService<R> {
    /// Create a service over the given repository.
    pub const fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Returns all stored events, unfiltered.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::Database`] if the store fails.
    pub async fn get_all_events(&self) -> Result<Vec<Event>> {
        self.repository.find_all().await
    }

    /// Returns the event with this id.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::NotFound`] if no such event exists.
    pub async fn get_event_by_id(&self, id: EventId) -> Result<Event> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(EventError::NotFound(id))
    }

    /// Persists a new event, returning it with the assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::Database`] if the insert fails.
    pub async fn add_event(&self, request: EventRequest) -> Result<Event> {
        let draft = mapper::to_draft(&request);
        let event = self.repository.insert(draft).await?;
        tracing::info!(id = %event.id, name = %event.name, "event created");
        Ok(event)
    }

    /// Merges the request into the stored event and persists the result.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::NotFound`] if no such event exists.
    pub async fn update_event(&self, request: EventRequest, id: EventId) -> Result<Event> {
        let mut event = self.get_event_by_id(id).await?;
        mapper::merge_into(&request, &mut event);
        let event = self.repository.update(&event).await?;
        tracing::info!(id = %event.id, "event updated");
        Ok(event)
    }

    /// Removes the event with this id.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::NotFound`] if no such event exists.
    pub async fn delete_event(&self, id: EventId) -> Result<()> {
        if !self.repository.exists_by_id(id).await? {
            return Err(EventError::NotFound(id));
        }
        self.repository.delete_by_id(id).await?;
        tracing::info!(id = %id, "event deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryEventRepository;
    use chrono::NaiveDate;

    fn service() -> EventService<InMemoryEventRepository> {
        EventService::new(InMemoryEventRepository::new())
    }

    fn request(name: &str) -> EventRequest {
        EventRequest {
            name: name.to_string(),
            date: NaiveDate::from_ymd_opt(2027, 7, 26).unwrap(),
            venue: "Blockbuster Mall, Kyiv".to_string(),
            artist: "Okean Elzy".to_string(),
            description: "Best festival ever, truly".to_string(),
            image_url: "http://x/y.jpg".to_string(),
        }
    }

    #[tokio::test]
    async fn add_then_get_returns_the_same_event() {
        let service = service();
        let created = service.add_event(request("Atlas United")).await.unwrap();
        let fetched = service.get_event_by_id(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn get_of_unknown_id_is_not_found() {
        let err = service().get_event_by_id(EventId(999)).await.unwrap_err();
        assert!(matches!(err, EventError::NotFound(EventId(999))));
        assert_eq!(err.to_string(), "Event not found with id: 999");
    }

    #[tokio::test]
    async fn update_replaces_every_field_and_keeps_id() {
        let service = service();
        let created = service.add_event(request("Original")).await.unwrap();

        let mut changed = request("Replaced");
        changed.venue = "Lviv Arena".to_string();
        changed.artist = "DakhaBrakha".to_string();
        let updated = service.update_event(changed.clone(), created.id).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Replaced");
        assert_eq!(updated.venue, "Lviv Arena");
        assert_eq!(updated.artist, "DakhaBrakha");

        let fetched = service.get_event_by_id(created.id).await.unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_not_found() {
        let err = service()
            .update_event(request("Anything"), EventId(7))
            .await
            .unwrap_err();
        assert!(matches!(err, EventError::NotFound(EventId(7))));
    }

    #[tokio::test]
    async fn delete_removes_the_event() {
        let service = service();
        let created = service.add_event(request("Short lived")).await.unwrap();

        service.delete_event(created.id).await.unwrap();

        let err = service.get_event_by_id(created.id).await.unwrap_err();
        assert!(matches!(err, EventError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_of_unknown_id_is_not_found() {
        let err = service().delete_event(EventId(41)).await.unwrap_err();
        assert!(matches!(err, EventError::NotFound(EventId(41))));
    }

    #[tokio::test]
    async fn get_all_returns_everything() {
        let service = service();
        service.add_event(request("First event")).await.unwrap();
        service.add_event(request("Second event")).await.unwrap();

        let all = service.get_all_events().await.unwrap();
        assert_eq!(all.len(), 2);
    }
}
