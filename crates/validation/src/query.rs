//! Identifier and collection-query validation.

use serde::Deserialize;

use staffhub_core::{RecordId, UserId};

use crate::fields::parse_date_field;
use crate::ValidationErrors;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Check an optional date-range filter on a listing endpoint.
pub fn validate_date_range(query: &DateRangeQuery) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let start = query
        .start_date
        .as_deref()
        .and_then(|s| parse_date_field(&mut errors, s, "start date"));
    let end = query
        .end_date
        .as_deref()
        .and_then(|s| parse_date_field(&mut errors, s, "end date"));

    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            errors.push("End date cannot be before start date");
        }
    }

    errors.into_result()
}

/// Check a route identifier's format (UUID).
pub fn validate_record_id(raw: &str) -> Result<RecordId, ValidationErrors> {
    raw.parse::<RecordId>().map_err(|_| {
        let mut errors = ValidationErrors::new();
        errors.push("Invalid identifier format");
        errors
    })
}

/// Check a user identifier's format (UUID).
pub fn validate_user_id(raw: &str) -> Result<UserId, ValidationErrors> {
    raw.parse::<UserId>().map_err(|_| {
        let mut errors = ValidationErrors::new();
        errors.push("Invalid user identifier format");
        errors
    })
}
