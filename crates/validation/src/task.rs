//! Task creation and progress-update validation.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::fields::{check_one_of, parse_date_field, require_str, NumberOrString};
use crate::ValidationErrors;

pub const TASK_PRIORITIES: &[&str] = &["low", "medium", "high", "urgent"];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskBody {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<String>,
    pub assigned_to: Option<String>,
    pub progress: Option<NumberOrString>,
}

/// Check a task creation/update payload.
pub fn validate_task(body: &TaskBody, _today: NaiveDate) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    require_str(&mut errors, body.title.as_deref(), "Title is required");

    if let Some(priority) = body.priority.as_deref() {
        check_one_of(&mut errors, priority, TASK_PRIORITIES, "priority");
    }

    if let Some(due) = body.due_date.as_deref() {
        parse_date_field(&mut errors, due, "due date");
    }

    if let Some(assigned) = body.assigned_to.as_deref() {
        if assigned.parse::<staffhub_core::UserId>().is_err() {
            errors.push("Invalid assignee id");
        }
    }

    if let Some(raw) = &body.progress {
        check_progress(&mut errors, raw);
    }

    errors.into_result()
}

/// Check a standalone progress update. The field is required here.
pub fn validate_task_progress(progress: Option<&NumberOrString>) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    match progress {
        None => errors.push("Progress is required"),
        Some(raw) => check_progress(&mut errors, raw),
    }
    errors.into_result()
}

fn check_progress(errors: &mut ValidationErrors, raw: &NumberOrString) {
    match raw.as_f64() {
        Some(p) if (0.0..=100.0).contains(&p) => {}
        _ => errors.push("Progress must be between 0 and 100"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    fn valid_task() -> TaskBody {
        TaskBody {
            title: Some("Prepare payroll run".to_string()),
            description: None,
            priority: Some("high".to_string()),
            due_date: Some("2026-03-20".to_string()),
            assigned_to: None,
            progress: None,
        }
    }

    #[test]
    fn well_formed_task_passes() {
        assert!(validate_task(&valid_task(), today()).is_ok());
    }

    #[test]
    fn title_is_the_only_required_field() {
        let errs = validate_task(&TaskBody::default(), today()).unwrap_err();
        assert_eq!(errs.messages(), &["Title is required"]);
    }

    #[test]
    fn unknown_priority_rejected() {
        let mut body = valid_task();
        body.priority = Some("critical".to_string());
        let errs = validate_task(&body, today()).unwrap_err();
        assert!(errs.messages()[0].contains("priority"));
    }

    #[test]
    fn malformed_assignee_rejected() {
        let mut body = valid_task();
        body.assigned_to = Some("not-a-uuid".to_string());
        let errs = validate_task(&body, today()).unwrap_err();
        assert_eq!(errs.messages(), &["Invalid assignee id"]);
    }

    #[test]
    fn progress_bounds() {
        assert!(validate_task_progress(Some(&NumberOrString::Number(0.0))).is_ok());
        assert!(validate_task_progress(Some(&NumberOrString::Number(100.0))).is_ok());
        assert!(validate_task_progress(Some(&NumberOrString::Text("55".to_string()))).is_ok());

        assert!(validate_task_progress(Some(&NumberOrString::Number(-1.0))).is_err());
        assert!(validate_task_progress(Some(&NumberOrString::Number(101.0))).is_err());
        assert!(validate_task_progress(None).is_err());
    }
}
