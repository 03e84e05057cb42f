//! Request/response DTOs and JSON mapping helpers.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use staffhub_core::{parse_local_date, CompanyId};
use staffhub_store::{AttendanceRecord, ExpenseRecord, LeaveRecord, TaskRecord};
use staffhub_validation::{NumberOrString, ValidationErrors};

use crate::app::errors::ApiError;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct UpdateLeaveStatusRequest {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTaskProgressRequest {
    pub progress: Option<NumberOrString>,
}

/// Common listing query: optional explicit company filter plus a date range.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub company: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl ListQuery {
    /// The explicit company filter, if syntactically valid.
    pub fn company_filter(&self) -> Result<Option<CompanyId>, ApiError> {
        match self.company.as_deref() {
            None => Ok(None),
            Some(raw) => raw.parse::<CompanyId>().map(Some).map_err(|_| {
                let mut errors = ValidationErrors::new();
                errors.push("Invalid company identifier");
                ApiError::from(errors)
            }),
        }
    }

    pub fn date_range(&self) -> staffhub_validation::DateRangeQuery {
        staffhub_validation::DateRangeQuery {
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
        }
    }
}

/// Re-parse a date field that already passed validation.
pub fn parsed_date(value: Option<&str>, field: &str) -> Result<NaiveDate, ApiError> {
    let raw = value.ok_or_else(|| ApiError::internal(format!("missing {field} after validation")))?;
    parse_local_date(raw).map_err(|e| ApiError::internal(format!("{field}: {e}")))
}

// -------------------------
// Response mapping
// -------------------------

pub fn leave_to_json(rec: &LeaveRecord) -> serde_json::Value {
    json!({
        "id": rec.id.to_string(),
        "company": rec.company_id.map(|c| c.to_string()),
        "user": rec.user_id.to_string(),
        "leaveType": rec.leave_type,
        "startDate": rec.start_date.to_string(),
        "endDate": rec.end_date.to_string(),
        "reason": rec.reason,
        "session": rec.half_day_session,
        "status": rec.status,
        "createdAt": rec.created_at.to_rfc3339(),
    })
}

pub fn expense_to_json(rec: &ExpenseRecord) -> serde_json::Value {
    json!({
        "id": rec.id.to_string(),
        "company": rec.company_id.map(|c| c.to_string()),
        "user": rec.user_id.to_string(),
        "title": rec.title,
        "amount": rec.amount,
        "category": rec.category,
        "date": rec.date.to_string(),
        "createdAt": rec.created_at.to_rfc3339(),
    })
}

pub fn task_to_json(rec: &TaskRecord) -> serde_json::Value {
    json!({
        "id": rec.id.to_string(),
        "company": rec.company_id.map(|c| c.to_string()),
        "createdBy": rec.created_by.to_string(),
        "assignedTo": rec.assigned_to.map(|u| u.to_string()),
        "title": rec.title,
        "description": rec.description,
        "priority": rec.priority,
        "dueDate": rec.due_date.map(|d| d.to_string()),
        "progress": rec.progress,
        "createdAt": rec.created_at.to_rfc3339(),
    })
}

pub fn attendance_to_json(rec: &AttendanceRecord) -> serde_json::Value {
    json!({
        "id": rec.id.to_string(),
        "company": rec.company_id.map(|c| c.to_string()),
        "user": rec.user_id.to_string(),
        "date": rec.date.to_string(),
        "checkIn": rec.check_in.map(|t| t.to_rfc3339()),
        "checkOut": rec.check_out.map(|t| t.to_rfc3339()),
        "location": rec.location.map(|l| json!({
            "latitude": l.latitude,
            "longitude": l.longitude,
        })),
    })
}
