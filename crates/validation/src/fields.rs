//! Field-level helpers shared by the per-kind validators.

use serde::Deserialize;

use staffhub_core::{parse_local_date, DateParseError};

use crate::ValidationErrors;

/// A numeric field that clients may send as a JSON number or a string
/// (HTML form payloads routinely stringify numbers).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Number(f64),
    Text(String),
}

impl NumberOrString {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            NumberOrString::Number(n) => Some(*n),
            NumberOrString::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }
}

/// Require a non-empty string field; on failure push `missing_msg`.
pub(crate) fn require_str<'a>(
    errors: &mut ValidationErrors,
    value: Option<&'a str>,
    missing_msg: &str,
) -> Option<&'a str> {
    match value {
        Some(s) if !s.trim().is_empty() => Some(s),
        _ => {
            errors.push(missing_msg);
            None
        }
    }
}

/// Check enumeration membership (case-insensitive), pushing a message naming
/// the accepted values.
pub(crate) fn check_one_of(
    errors: &mut ValidationErrors,
    value: &str,
    allowed: &[&str],
    field_label: &str,
) -> bool {
    if allowed.iter().any(|a| a.eq_ignore_ascii_case(value)) {
        true
    } else {
        errors.push(format!(
            "Invalid {}: must be one of {}",
            field_label,
            allowed.join(", ")
        ));
        false
    }
}

/// Parse a date field as a local calendar date, pushing a message on failure.
pub(crate) fn parse_date_field(
    errors: &mut ValidationErrors,
    value: &str,
    field_label: &str,
) -> Option<chrono::NaiveDate> {
    match parse_local_date(value) {
        Ok(d) => Some(d),
        Err(DateParseError::Invalid(_)) => {
            errors.push(format!("Invalid {field_label}"));
            None
        }
    }
}
