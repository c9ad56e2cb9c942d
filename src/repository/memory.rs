//! In-memory event repository.
//!
//! Backs tests and DB-less local runs. Mirrors the Postgres contract:
//! monotonically increasing ids that are never reused, rows returned in id
//! order.

use crate::error::Result;
use crate::model::{Event, EventDraft, EventId};
use crate::repository::EventRepository;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Event repository over a shared in-process map.
#[derive(Clone, Default)]
pub struct InMemoryEventRepository {
    rows: Arc<Mutex<BTreeMap<i64, Event>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryEventRepository {
    /// Create an empty repository. The first assigned id is 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn rows(&self) -> std::sync::MutexGuard<'_, BTreeMap<i64, Event>> {
        // Row data stays consistent even if a test thread panicked mid-write.
        self.rows.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EventRepository for InMemoryEventRepository {
    async fn find_all(&self) -> Result<Vec<Event>> {
        Ok(self.rows().values().cloned().collect())
    }

    async fn find_by_id(&self, id: EventId) -> Result<Option<Event>> {
        Ok(self.rows().get(&id.as_i64()).cloned())
    }

    async fn exists_by_id(&self, id: EventId) -> Result<bool> {
        Ok(self.rows().contains_key(&id.as_i64()))
    }

    async fn insert(&self, draft: EventDraft) -> Result<Event> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let event = Event {
            id: EventId(id),
            name: draft.name,
            date: draft.date,
            venue: draft.venue,
            artist: draft.artist,
            description: draft.description,
            image_url: draft.image_url,
        };
        self.rows().insert(id, event.clone());
        Ok(event)
    }

    async fn update(&self, event: &Event) -> Result<Event> {
        self.rows().insert(event.id.as_i64(), event.clone());
        Ok(event.clone())
    }

    async fn delete_by_id(&self, id: EventId) -> Result<()> {
        self.rows().remove(&id.as_i64());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn draft(name: &str) -> EventDraft {
        EventDraft {
            name: name.to_string(),
            date: NaiveDate::from_ymd_opt(2027, 7, 26).unwrap(),
            venue: "Kyiv".to_string(),
            artist: "Okean Elzy".to_string(),
            description: "Best festival ever, truly".to_string(),
            image_url: "http://x/y.jpg".to_string(),
        }
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let repo = InMemoryEventRepository::new();

        let first = repo.insert(draft("First")).await.unwrap();
        let second = repo.insert(draft("Second")).await.unwrap();

        assert_eq!(first.id, EventId(1));
        assert_eq!(second.id, EventId(2));
    }

    #[tokio::test]
    async fn ids_are_never_reused_after_delete() {
        let repo = InMemoryEventRepository::new();

        let first = repo.insert(draft("First")).await.unwrap();
        repo.delete_by_id(first.id).await.unwrap();
        let second = repo.insert(draft("Second")).await.unwrap();

        assert_ne!(second.id, first.id);
        assert_eq!(second.id, EventId(2));
    }

    #[tokio::test]
    async fn find_all_returns_rows_in_id_order() {
        let repo = InMemoryEventRepository::new();
        repo.insert(draft("First")).await.unwrap();
        repo.insert(draft("Second")).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(
            all.iter().map(|e| e.id).collect::<Vec<_>>(),
            vec![EventId(1), EventId(2)]
        );
    }

    #[tokio::test]
    async fn delete_of_absent_id_is_a_no_op() {
        let repo = InMemoryEventRepository::new();
        repo.delete_by_id(EventId(99)).await.unwrap();
        assert!(!repo.exists_by_id(EventId(99)).await.unwrap());
    }
}
