//! Leave request and half-day leave request validation.

use chrono::NaiveDate;
use serde::Deserialize;

use staffhub_core::is_weekend;

use crate::fields::{check_one_of, parse_date_field, require_str};
use crate::ValidationErrors;

pub const LEAVE_TYPES: &[&str] = &["casual", "sick", "earned", "unpaid"];
pub const HALF_DAY_SESSIONS: &[&str] = &["morning", "afternoon"];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequestBody {
    pub leave_type: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HalfDayLeaveBody {
    pub leave_type: Option<String>,
    pub date: Option<String>,
    pub session: Option<String>,
    pub reason: Option<String>,
}

/// Check a full-day leave request. `today` is the caller's local calendar
/// date.
pub fn validate_leave_request(
    body: &LeaveRequestBody,
    today: NaiveDate,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Some(leave_type) = require_str(&mut errors, body.leave_type.as_deref(), "Leave type is required") {
        check_one_of(&mut errors, leave_type, LEAVE_TYPES, "leave type");
    }

    let start = require_str(&mut errors, body.start_date.as_deref(), "Start date is required")
        .and_then(|s| parse_date_field(&mut errors, s, "start date"));
    if let Some(start) = start {
        if start < today {
            errors.push("Start date cannot be in the past");
        }
    }

    let end = require_str(&mut errors, body.end_date.as_deref(), "End date is required")
        .and_then(|s| parse_date_field(&mut errors, s, "end date"));
    match (start, end) {
        (_, Some(end)) if end < today => {
            errors.push("End date cannot be in the past");
        }
        (Some(start), Some(end)) if end < start => {
            errors.push("End date cannot be before start date");
        }
        _ => {}
    }

    require_str(&mut errors, body.reason.as_deref(), "Reason is required");

    errors.into_result()
}

/// Check a half-day leave request. Half days additionally reject weekends.
pub fn validate_half_day_leave(
    body: &HalfDayLeaveBody,
    today: NaiveDate,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Some(leave_type) = require_str(&mut errors, body.leave_type.as_deref(), "Leave type is required") {
        check_one_of(&mut errors, leave_type, LEAVE_TYPES, "leave type");
    }

    let date = require_str(&mut errors, body.date.as_deref(), "Date is required")
        .and_then(|s| parse_date_field(&mut errors, s, "date"));
    if let Some(date) = date {
        if date < today {
            errors.push("Date cannot be in the past");
        }
        if is_weekend(date) {
            errors.push("Half-day leave cannot fall on a weekend");
        }
    }

    if let Some(session) = require_str(&mut errors, body.session.as_deref(), "Session is required") {
        check_one_of(&mut errors, session, HALF_DAY_SESSIONS, "session");
    }

    require_str(&mut errors, body.reason.as_deref(), "Reason is required");

    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        // Fixed reference date: Monday 2026-03-02.
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    fn valid_leave() -> LeaveRequestBody {
        LeaveRequestBody {
            leave_type: Some("casual".to_string()),
            start_date: Some("2026-03-10".to_string()),
            end_date: Some("2026-03-12".to_string()),
            reason: Some("family event".to_string()),
        }
    }

    #[test]
    fn well_formed_request_passes() {
        assert!(validate_leave_request(&valid_leave(), today()).is_ok());
    }

    #[test]
    fn missing_fields_accumulate_in_field_check_order() {
        let body = LeaveRequestBody {
            leave_type: None,
            start_date: None,
            end_date: Some("2026-03-12".to_string()),
            reason: None,
        };
        let errs = validate_leave_request(&body, today()).unwrap_err();
        assert_eq!(
            errs.messages(),
            &[
                "Leave type is required",
                "Start date is required",
                "Reason is required",
            ]
        );
    }

    #[test]
    fn unknown_leave_type_rejected() {
        let mut body = valid_leave();
        body.leave_type = Some("vacation".to_string());
        let errs = validate_leave_request(&body, today()).unwrap_err();
        assert_eq!(errs.messages().len(), 1);
        assert!(errs.messages()[0].contains("leave type"));
    }

    #[test]
    fn past_start_date_rejected_today_allowed() {
        let mut body = valid_leave();
        body.start_date = Some("2026-03-01".to_string());
        let errs = validate_leave_request(&body, today()).unwrap_err();
        assert!(errs.messages().iter().any(|m| m.contains("past")));

        let mut body = valid_leave();
        body.start_date = Some("2026-03-02".to_string());
        body.end_date = Some("2026-03-02".to_string());
        assert!(validate_leave_request(&body, today()).is_ok());
    }

    #[test]
    fn end_before_start_rejected() {
        let mut body = valid_leave();
        body.start_date = Some("2026-03-12".to_string());
        body.end_date = Some("2026-03-10".to_string());
        let errs = validate_leave_request(&body, today()).unwrap_err();
        assert_eq!(errs.messages(), &["End date cannot be before start date"]);
    }

    #[test]
    fn unparseable_dates_reported_per_field() {
        let mut body = valid_leave();
        body.start_date = Some("03/10/2026".to_string());
        body.end_date = Some("not-a-date".to_string());
        let errs = validate_leave_request(&body, today()).unwrap_err();
        assert_eq!(errs.messages(), &["Invalid start date", "Invalid end date"]);
    }

    fn valid_half_day() -> HalfDayLeaveBody {
        HalfDayLeaveBody {
            leave_type: Some("sick".to_string()),
            date: Some("2026-03-10".to_string()),
            session: Some("morning".to_string()),
            reason: Some("appointment".to_string()),
        }
    }

    #[test]
    fn half_day_passes_on_weekday() {
        assert!(validate_half_day_leave(&valid_half_day(), today()).is_ok());
    }

    #[test]
    fn half_day_weekend_rejected_as_calendar_date() {
        // 2026-03-07 is a Saturday; the check must hold regardless of the
        // host's UTC offset because the string never becomes an instant.
        let mut body = valid_half_day();
        body.date = Some("2026-03-07".to_string());
        let errs = validate_half_day_leave(&body, today()).unwrap_err();
        assert!(errs.messages().iter().any(|m| m.contains("weekend")));
    }

    #[test]
    fn half_day_sunday_rejected() {
        let mut body = valid_half_day();
        body.date = Some("2026-03-08".to_string());
        let errs = validate_half_day_leave(&body, today()).unwrap_err();
        assert!(errs.messages().iter().any(|m| m.contains("weekend")));
    }

    #[test]
    fn half_day_unknown_session_rejected() {
        let mut body = valid_half_day();
        body.session = Some("evening".to_string());
        let errs = validate_half_day_leave(&body, today()).unwrap_err();
        assert!(errs.messages().iter().any(|m| m.contains("session")));
    }

    #[test]
    fn half_day_past_weekend_date_reports_both_rules() {
        // Saturday before `today`: both the past check and the weekend check
        // fire, in that order.
        let mut body = valid_half_day();
        body.date = Some("2026-02-28".to_string());
        let errs = validate_half_day_leave(&body, today()).unwrap_err();
        assert_eq!(
            errs.messages(),
            &["Date cannot be in the past", "Half-day leave cannot fall on a weekend"]
        );
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use chrono::Duration;
        use proptest::prelude::*;

        proptest! {
            /// Any request with a known type, ordered future dates, and a
            /// non-empty reason passes.
            #[test]
            fn ordered_future_ranges_pass(
                type_idx in 0..LEAVE_TYPES.len(),
                start_offset in 0i64..365,
                span in 0i64..30,
                reason in "[a-z ]{1,40}",
            ) {
                let start = today() + Duration::days(start_offset);
                let body = LeaveRequestBody {
                    leave_type: Some(LEAVE_TYPES[type_idx].to_string()),
                    start_date: Some(start.to_string()),
                    end_date: Some((start + Duration::days(span)).to_string()),
                    reason: Some(reason),
                };
                prop_assert!(validate_leave_request(&body, today()).is_ok());
            }

            /// Inverted ranges are always rejected with exactly the ordering
            /// message, regardless of how far apart the dates are.
            #[test]
            fn inverted_ranges_always_rejected(
                start_offset in 31i64..365,
                gap in 1i64..30,
            ) {
                let start = today() + Duration::days(start_offset);
                let mut body = valid_leave();
                body.start_date = Some(start.to_string());
                body.end_date = Some((start - Duration::days(gap)).to_string());
                let errs = validate_leave_request(&body, today()).unwrap_err();
                prop_assert_eq!(errs.messages(), &["End date cannot be before start date"]);
            }
        }
    }
}
