//! `staffhub-validation` — pure request-shape validators.
//!
//! Every validator is synchronous and stateless: it takes the parsed body
//! plus "today" as a local calendar date, and either passes the request
//! through untouched or returns *all* accumulated violations at once. The
//! caller (the API layer) supplies `today` from its local clock, keeping
//! these functions deterministic under test.

pub mod attendance;
pub mod errors;
pub mod expense;
pub mod fields;
pub mod leave;
pub mod query;
pub mod task;

pub use attendance::{validate_attendance, AttendanceBody, GeoBody};
pub use errors::ValidationErrors;
pub use expense::{validate_expense, ExpenseBody, EXPENSE_CATEGORIES};
pub use fields::NumberOrString;
pub use leave::{
    validate_half_day_leave, validate_leave_request, HalfDayLeaveBody, LeaveRequestBody,
    HALF_DAY_SESSIONS, LEAVE_TYPES,
};
pub use query::{validate_date_range, validate_record_id, validate_user_id, DateRangeQuery};
pub use task::{validate_task, validate_task_progress, TaskBody, TASK_PRIORITIES};
