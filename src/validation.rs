//! Declarative per-field validation of event requests.
//!
//! Pure functions of the request and the current date. All violations are
//! collected so a client sees every failing field at once, not just the
//! first. Length limits count characters, not bytes.

use crate::dto::EventRequest;
use chrono::NaiveDate;

/// A single field-level constraint violation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldViolation {
    /// Wire name of the offending field.
    pub field: &'static str,
    /// Human-readable constraint message.
    pub message: String,
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

const NAME_MIN: usize = 3;
const NAME_MAX: usize = 100;
const VENUE_MIN: usize = 3;
const VENUE_MAX: usize = 150;
const ARTIST_MIN: usize = 2;
const ARTIST_MAX: usize = 100;
const DESCRIPTION_MIN: usize = 10;
const DESCRIPTION_MAX: usize = 1000;

/// Validates an event request against the per-field constraints.
///
/// `today` is injected rather than read from the clock so boundary cases are
/// testable; the date rule is "strictly after `today`".
///
/// # Errors
///
/// Returns every [`FieldViolation`] found, in field order.
pub fn validate(request: &EventRequest, today: NaiveDate) -> Result<(), Vec<FieldViolation>> {
    let mut violations = Vec::new();

    check_text(
        &mut violations,
        "name",
        &request.name,
        NAME_MIN,
        NAME_MAX,
        "Name",
    );

    if request.date <= today {
        violations.push(FieldViolation {
            field: "date",
            message: "Date must be in the future".to_string(),
        });
    }

    check_text(
        &mut violations,
        "venue",
        &request.venue,
        VENUE_MIN,
        VENUE_MAX,
        "Venue",
    );
    check_text(
        &mut violations,
        "artist",
        &request.artist,
        ARTIST_MIN,
        ARTIST_MAX,
        "Artist name",
    );
    check_text(
        &mut violations,
        "description",
        &request.description,
        DESCRIPTION_MIN,
        DESCRIPTION_MAX,
        "Description",
    );

    if request.image_url.trim().is_empty() {
        violations.push(FieldViolation {
            field: "imageURL",
            message: "Image URL must not be empty".to_string(),
        });
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Non-empty after trimming, then a character-count range check.
fn check_text(
    violations: &mut Vec<FieldViolation>,
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
    label: &str,
) {
    if value.trim().is_empty() {
        violations.push(FieldViolation {
            field,
            message: format!("{label} must not be empty"),
        });
        return;
    }

    let len = value.chars().count();
    if len < min || len > max {
        violations.push(FieldViolation {
            field,
            message: format!("{label} must be between {min} and {max} characters"),
        });
    }
}
