//! Attendance check-in/out validation.

use serde::Deserialize;

use crate::fields::NumberOrString;
use crate::ValidationErrors;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoBody {
    pub latitude: Option<NumberOrString>,
    pub longitude: Option<NumberOrString>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceBody {
    pub location: Option<GeoBody>,
    pub notes: Option<String>,
}

/// Check a check-in/check-out payload. Geolocation is optional, but when
/// present both coordinates must be numeric and within range.
pub fn validate_attendance(body: &AttendanceBody) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Some(location) = &body.location {
        match location.latitude.as_ref().and_then(|v| v.as_f64()) {
            Some(lat) if (-90.0..=90.0).contains(&lat) => {}
            Some(_) => errors.push("Latitude must be between -90 and 90"),
            None => errors.push("Latitude is required and must be a number"),
        }
        match location.longitude.as_ref().and_then(|v| v.as_f64()) {
            Some(lon) if (-180.0..=180.0).contains(&lon) => {}
            Some(_) => errors.push("Longitude must be between -180 and 180"),
            None => errors.push("Longitude is required and must be a number"),
        }
    }

    errors.into_result()
}
