//! Domain types for event records.
//!
//! An [`Event`] is a persisted row with a server-assigned [`EventId`].
//! An [`EventDraft`] carries the same fields before persistence, when no
//! identifier exists yet. Keeping the two shapes separate means "id absent"
//! never has to be modeled as an `Option` on the persisted type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Unique identifier for a persisted event.
///
/// Assigned by the store on insert, unique and never reused, immutable for
/// the lifetime of the record. Serialized as a bare integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub i64);

impl EventId {
    /// Returns the raw identifier value.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted event record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Server-assigned identifier.
    pub id: EventId,
    /// Event name.
    pub name: String,
    /// Calendar date the event takes place on.
    pub date: NaiveDate,
    /// Venue where the event takes place.
    pub venue: String,
    /// Headline artist or band.
    pub artist: String,
    /// Free-text description.
    pub description: String,
    /// Poster or image URL.
    pub image_url: String,
}

/// An event that has not been persisted yet, so no identifier is assigned.
///
/// Produced by mapping a validated request; consumed by
/// [`EventRepository::insert`](crate::repository::EventRepository::insert).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventDraft {
    /// Event name.
    pub name: String,
    /// Calendar date the event takes place on.
    pub date: NaiveDate,
    /// Venue where the event takes place.
    pub venue: String,
    /// Headline artist or band.
    pub artist: String,
    /// Free-text description.
    pub description: String,
    /// Poster or image URL.
    pub image_url: String,
}
