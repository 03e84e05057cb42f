//! Leave request endpoints.
//!
//! The full gate chain is visible here: `protect` (layered at app level) →
//! role gate where declared → permission gate → tenant guard → shape
//! validation → handler.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use chrono::Utc;

use staffhub_auth::{Action, Role};
use staffhub_core::{today_local, RecordId};
use staffhub_store::{LeaveRecord, LeaveStatus};
use staffhub_validation::{
    validate_date_range, validate_half_day_leave, validate_leave_request, validate_record_id,
    HalfDayLeaveBody, LeaveRequestBody,
};

use crate::app::errors::ApiError;
use crate::app::services::AppServices;
use crate::app::{dto, guards};
use crate::context::CurrentUser;
use crate::middleware::role_gate;

const MODULE: &str = "leaves";

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_leave).get(list_leaves))
        .route("/half-day", post(create_half_day_leave))
        .route("/:id", get(get_leave).delete(delete_leave))
        .route(
            "/:id/status",
            put(update_leave_status).route_layer(axum::middleware::from_fn(|req, next| {
                role_gate(&[Role::Admin, Role::Hr], req, next)
            })),
        )
}

pub async fn create_leave(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(current): Extension<CurrentUser>,
    Json(body): Json<LeaveRequestBody>,
) -> Result<axum::response::Response, ApiError> {
    let principal = current.principal();
    guards::require_permission(&services, principal, MODULE, Action::Create)?;
    validate_leave_request(&body, today_local())?;

    let record = LeaveRecord {
        id: RecordId::new(),
        company_id: principal.company_id,
        user_id: principal.user_id,
        leave_type: body.leave_type.clone().unwrap_or_default().to_lowercase(),
        start_date: dto::parsed_date(body.start_date.as_deref(), "start date")?,
        end_date: dto::parsed_date(body.end_date.as_deref(), "end date")?,
        reason: body.reason.clone().unwrap_or_default(),
        half_day_session: None,
        status: LeaveStatus::Pending,
        created_at: Utc::now(),
    };
    services.leaves.insert(record.id, record.clone());

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "success": true, "leave": dto::leave_to_json(&record) })),
    )
        .into_response())
}

pub async fn create_half_day_leave(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(current): Extension<CurrentUser>,
    Json(body): Json<HalfDayLeaveBody>,
) -> Result<axum::response::Response, ApiError> {
    let principal = current.principal();
    guards::require_permission(&services, principal, MODULE, Action::Create)?;
    validate_half_day_leave(&body, today_local())?;

    let date = dto::parsed_date(body.date.as_deref(), "date")?;
    let record = LeaveRecord {
        id: RecordId::new(),
        company_id: principal.company_id,
        user_id: principal.user_id,
        leave_type: body.leave_type.clone().unwrap_or_default().to_lowercase(),
        start_date: date,
        end_date: date,
        reason: body.reason.clone().unwrap_or_default(),
        half_day_session: body.session.clone().map(|s| s.to_lowercase()),
        status: LeaveStatus::Pending,
        created_at: Utc::now(),
    };
    services.leaves.insert(record.id, record.clone());

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "success": true, "leave": dto::leave_to_json(&record) })),
    )
        .into_response())
}

pub async fn list_leaves(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(current): Extension<CurrentUser>,
    Query(query): Query<dto::ListQuery>,
) -> Result<axum::response::Response, ApiError> {
    let principal = current.principal();
    guards::require_permission(&services, principal, MODULE, Action::View)?;
    validate_date_range(&query.date_range())?;

    let filter = guards::scope_to_company(principal, query.company_filter()?)?;
    let range = query.date_range();
    let start = range.start_date.as_deref().and_then(|s| staffhub_core::parse_local_date(s).ok());
    let end = range.end_date.as_deref().and_then(|s| staffhub_core::parse_local_date(s).ok());

    let mut records = services.leaves.list_where(|rec| {
        guards::passes_company_filter(rec, filter)
            && start.is_none_or(|s| rec.end_date >= s)
            && end.is_none_or(|e| rec.start_date <= e)
    });
    records.sort_by_key(|r| r.created_at);

    let leaves: Vec<_> = records.iter().map(dto::leave_to_json).collect();
    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "success": true, "count": leaves.len(), "leaves": leaves })),
    )
        .into_response())
}

pub async fn get_leave(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<axum::response::Response, ApiError> {
    let principal = current.principal();
    guards::require_permission(&services, principal, MODULE, Action::View)?;

    let id = validate_record_id(&id)?;
    let record = guards::enforce_company_access(principal, services.leaves.get(id), "leave request")?;

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "success": true, "leave": dto::leave_to_json(&record) })),
    )
        .into_response())
}

pub async fn update_leave_status(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateLeaveStatusRequest>,
) -> Result<axum::response::Response, ApiError> {
    let principal = current.principal();
    guards::require_permission(&services, principal, MODULE, Action::Edit)?;

    let status = match body.status.to_lowercase().as_str() {
        "approved" => LeaveStatus::Approved,
        "rejected" => LeaveStatus::Rejected,
        "pending" => LeaveStatus::Pending,
        _ => {
            let mut errors = staffhub_validation::ValidationErrors::new();
            errors.push("Invalid status: must be one of pending, approved, rejected");
            return Err(ApiError::from(errors));
        }
    };

    let id = validate_record_id(&id)?;
    guards::enforce_company_access(principal, services.leaves.get(id), "leave request")?;

    let updated = services
        .leaves
        .update(id, |rec| rec.status = status)
        .ok_or_else(|| ApiError::not_found("leave request not found"))?;

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "success": true, "leave": dto::leave_to_json(&updated) })),
    )
        .into_response())
}

pub async fn delete_leave(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<axum::response::Response, ApiError> {
    let principal = current.principal();
    guards::require_permission(&services, principal, MODULE, Action::Delete)?;

    let id = validate_record_id(&id)?;
    guards::enforce_company_access(principal, services.leaves.get(id), "leave request")?;
    services.leaves.remove(id);

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "success": true, "message": "leave request deleted" })),
    )
        .into_response())
}
