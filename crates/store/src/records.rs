//! Business records subject to company isolation.
//!
//! Guards only ever *read* the `company_id` field; lifecycle belongs to the
//! resource handlers. A record with no company is globally shared.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use staffhub_core::{CompanyId, RecordId, UserId};

/// Anything carrying an optional company scope.
pub trait CompanyScoped {
    fn company_id(&self) -> Option<CompanyId>;
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

/// Full-day or half-day leave request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRecord {
    pub id: RecordId,
    pub company_id: Option<CompanyId>,
    pub user_id: UserId,
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    /// `Some` for half-day requests ("morning"/"afternoon").
    pub half_day_session: Option<String>,
    pub status: LeaveStatus,
    pub created_at: DateTime<Utc>,
}

impl CompanyScoped for LeaveRecord {
    fn company_id(&self) -> Option<CompanyId> {
        self.company_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: RecordId,
    pub company_id: Option<CompanyId>,
    pub user_id: UserId,
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl CompanyScoped for ExpenseRecord {
    fn company_id(&self) -> Option<CompanyId> {
        self.company_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: RecordId,
    pub company_id: Option<CompanyId>,
    pub created_by: UserId,
    pub assigned_to: Option<UserId>,
    pub title: String,
    pub description: Option<String>,
    pub priority: String,
    pub due_date: Option<NaiveDate>,
    /// Percent complete, 0..=100.
    pub progress: u8,
    pub created_at: DateTime<Utc>,
}

impl CompanyScoped for TaskRecord {
    fn company_id(&self) -> Option<CompanyId> {
        self.company_id
    }
}

/// Check-in/out coordinates, both present or neither.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: RecordId,
    pub company_id: Option<CompanyId>,
    pub user_id: UserId,
    pub date: NaiveDate,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
    pub location: Option<GeoPoint>,
}

impl CompanyScoped for AttendanceRecord {
    fn company_id(&self) -> Option<CompanyId> {
        self.company_id
    }
}
