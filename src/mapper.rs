//! Explicit conversions between wire shapes and the domain entity.
//!
//! Hand-written field-by-field mappings, one function per direction. No
//! validation happens here; requests are validated before they reach the
//! mapping layer.

use crate::dto::{EventRequest, EventResponse};
use crate::model::{Event, EventDraft};

/// Maps a validated request to a draft entity with no identifier assigned.
#[must_use]
pub fn to_draft(request: &EventRequest) -> EventDraft {
    EventDraft {
        name: request.name.clone(),
        date: request.date,
        venue: request.venue.clone(),
        artist: request.artist.clone(),
        description: request.description.clone(),
        image_url: request.image_url.clone(),
    }
}

/// Maps a persisted entity to its response shape, all fields verbatim.
#[must_use]
pub fn to_response(event: &Event) -> EventResponse {
    EventResponse {
        id: event.id,
        name: event.name.clone(),
        date: event.date,
        venue: event.venue.clone(),
        artist: event.artist.clone(),
        description: event.description.clone(),
        image_url: event.image_url.clone(),
    }
}

/// Overwrites every mutable field of `event` with the request's values.
///
/// The identifier is left untouched.
pub fn merge_into(request: &EventRequest, event: &mut Event) {
    event.name = request.name.clone();
    event.date = request.date;
    event.venue = request.venue.clone();
    event.artist = request.artist.clone();
    event.description = request.description.clone();
    event.image_url = request.image_url.clone();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EventId;
    use chrono::NaiveDate;

    fn request() -> EventRequest {
        EventRequest {
            name: "Atlas United".to_string(),
            date: NaiveDate::from_ymd_opt(2027, 7, 26).unwrap(),
            venue: "Blockbuster Mall, Kyiv".to_string(),
            artist: "Okean Elzy".to_string(),
            description: "Best festival ever, truly".to_string(),
            image_url: "https://example.com/atlas.jpg".to_string(),
        }
    }

    #[test]
    fn to_draft_copies_all_fields() {
        let request = request();
        let draft = to_draft(&request);

        assert_eq!(draft.name, request.name);
        assert_eq!(draft.date, request.date);
        assert_eq!(draft.venue, request.venue);
        assert_eq!(draft.artist, request.artist);
        assert_eq!(draft.description, request.description);
        assert_eq!(draft.image_url, request.image_url);
    }

    #[test]
    fn to_response_copies_all_fields_verbatim() {
        let event = Event {
            id: EventId(7),
            name: "Atlas United".to_string(),
            date: NaiveDate::from_ymd_opt(2027, 7, 26).unwrap(),
            venue: "Kyiv".to_string(),
            artist: "Okean Elzy".to_string(),
            description: "Best festival ever, truly".to_string(),
            image_url: "http://x/y.jpg".to_string(),
        };

        let response = to_response(&event);
        assert_eq!(response.id, EventId(7));
        assert_eq!(response.name, event.name);
        assert_eq!(response.date, event.date);
        assert_eq!(response.venue, event.venue);
        assert_eq!(response.artist, event.artist);
        assert_eq!(response.description, event.description);
        assert_eq!(response.image_url, event.image_url);
    }

    #[test]
    fn merge_into_overwrites_every_field_but_keeps_id() {
        let mut event = Event {
            id: EventId(3),
            name: "Old name".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            venue: "Old venue".to_string(),
            artist: "Old artist".to_string(),
            description: "Old description here".to_string(),
            image_url: "http://old/poster.jpg".to_string(),
        };

        let request = request();
        merge_into(&request, &mut event);

        assert_eq!(event.id, EventId(3));
        assert_eq!(event.name, request.name);
        assert_eq!(event.date, request.date);
        assert_eq!(event.venue, request.venue);
        assert_eq!(event.artist, request.artist);
        assert_eq!(event.description, request.description);
        assert_eq!(event.image_url, request.image_url);
    }
}
