//! PostgreSQL event repository.
//!
//! One row per event in the `events` table, `id` assigned by a `BIGSERIAL`
//! primary key. Every operation is a single statement, so the unit of work
//! is the statement's own transaction.

use crate::error::{EventError, Result};
use crate::model::{Event, EventDraft, EventId};
use crate::repository::EventRepository;
use chrono::NaiveDate;
use sqlx::PgPool;

/// `PostgreSQL`-backed event repository.
#[derive(Clone)]
pub struct PostgresEventRepository {
    /// `PostgreSQL` connection pool.
    pool: PgPool,
}

impl PostgresEventRepository {
    /// Create a repository over an existing connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run database migrations.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::Database`] if migrations fail.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| EventError::Database(format!("Migration failed: {e}")))?;
        Ok(())
    }
}

/// Row shape of the `events` table.
#[derive(sqlx::FromRow)]
struct EventRow {
    id: i64,
    name: String,
    date: NaiveDate,
    venue: String,
    artist: String,
    description: String,
    image_url: String,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Self {
            id: EventId(row.id),
            name: row.name,
            date: row.date,
            venue: row.venue,
            artist: row.artist,
            description: row.description,
            image_url: row.image_url,
        }
    }
}

const COLUMNS: &str = "id, name, date, venue, artist, description, image_url";

impl EventRepository for PostgresEventRepository {
    async fn find_all(&self) -> Result<Vec<Event>> {
        let rows = sqlx::query_as::<_, EventRow>(&format!(
            "SELECT {COLUMNS} FROM events ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| EventError::Database(format!("Failed to list events: {e}")))?;

        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn find_by_id(&self, id: EventId) -> Result<Option<Event>> {
        let row = sqlx::query_as::<_, EventRow>(&format!(
            "SELECT {COLUMNS} FROM events WHERE id = $1"
        ))
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| EventError::Database(format!("Failed to get event {id}: {e}")))?;

        Ok(row.map(Event::from))
    }

    async fn exists_by_id(&self, id: EventId) -> Result<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM events WHERE id = $1)")
            .bind(id.as_i64())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| EventError::Database(format!("Failed to check event {id}: {e}")))
    }

    async fn insert(&self, draft: EventDraft) -> Result<Event> {
        let row = sqlx::query_as::<_, EventRow>(&format!(
            "INSERT INTO events (name, date, venue, artist, description, image_url) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        ))
        .bind(&draft.name)
        .bind(draft.date)
        .bind(&draft.venue)
        .bind(&draft.artist)
        .bind(&draft.description)
        .bind(&draft.image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| EventError::Database(format!("Failed to insert event: {e}")))?;

        Ok(Event::from(row))
    }

    async fn update(&self, event: &Event) -> Result<Event> {
        let row = sqlx::query_as::<_, EventRow>(&format!(
            "UPDATE events \
             SET name = $1, date = $2, venue = $3, artist = $4, description = $5, image_url = $6 \
             WHERE id = $7 \
             RETURNING {COLUMNS}"
        ))
        .bind(&event.name)
        .bind(event.date)
        .bind(&event.venue)
        .bind(&event.artist)
        .bind(&event.description)
        .bind(&event.image_url)
        .bind(event.id.as_i64())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| EventError::Database(format!("Failed to update event {}: {e}", event.id)))?;

        Ok(Event::from(row))
    }

    async fn delete_by_id(&self, id: EventId) -> Result<()> {
        sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| EventError::Database(format!("Failed to delete event {id}: {e}")))?;

        Ok(())
    }
}
