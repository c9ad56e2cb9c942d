//! Wire shapes for the event API.
//!
//! [`EventRequest`] is the body accepted on create and update, before
//! validation. [`EventResponse`] is what clients get back, with the leading
//! `id`. The JSON field `imageURL` keeps its historical camel-case spelling
//! on both shapes.

use crate::model::EventId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request body for creating or updating an event.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct EventRequest {
    /// Event name.
    pub name: String,
    /// Date the event takes place on, `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Venue where the event takes place.
    pub venue: String,
    /// Headline artist or band.
    pub artist: String,
    /// Free-text description.
    pub description: String,
    /// Poster or image URL.
    #[serde(rename = "imageURL")]
    pub image_url: String,
}

/// Event data returned to clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventResponse {
    /// Server-assigned identifier.
    pub id: EventId,
    /// Event name.
    pub name: String,
    /// Date the event takes place on, `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Venue where the event takes place.
    pub venue: String,
    /// Headline artist or band.
    pub artist: String,
    /// Free-text description.
    pub description: String,
    /// Poster or image URL.
    #[serde(rename = "imageURL")]
    pub image_url: String,
}
