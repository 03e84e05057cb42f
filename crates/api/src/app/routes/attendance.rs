//! Attendance check-in/out endpoints.

use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;

use staffhub_auth::Action;
use staffhub_core::{today_local, RecordId};
use staffhub_store::{AttendanceRecord, GeoPoint};
use staffhub_validation::{validate_attendance, validate_date_range, AttendanceBody};

use crate::app::errors::ApiError;
use crate::app::services::AppServices;
use crate::app::{dto, guards};
use crate::context::CurrentUser;

const MODULE: &str = "attendance";

pub fn router() -> Router {
    Router::new()
        .route("/check-in", post(check_in))
        .route("/check-out", post(check_out))
        .route("/", get(list_attendance))
}

fn geo_point(body: &AttendanceBody) -> Option<GeoPoint> {
    let location = body.location.as_ref()?;
    Some(GeoPoint {
        latitude: location.latitude.as_ref()?.as_f64()?,
        longitude: location.longitude.as_ref()?.as_f64()?,
    })
}

pub async fn check_in(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(current): Extension<CurrentUser>,
    Json(body): Json<AttendanceBody>,
) -> Result<axum::response::Response, ApiError> {
    let principal = current.principal();
    guards::require_permission(&services, principal, MODULE, Action::Create)?;
    validate_attendance(&body)?;

    let today = today_local();
    let user_id = principal.user_id;

    let already = services
        .attendance
        .list_where(|rec| rec.user_id == user_id && rec.date == today);
    if !already.is_empty() {
        let mut errors = staffhub_validation::ValidationErrors::new();
        errors.push("Already checked in today");
        return Err(ApiError::from(errors));
    }

    let record = AttendanceRecord {
        id: RecordId::new(),
        company_id: principal.company_id,
        user_id,
        date: today,
        check_in: Some(Utc::now()),
        check_out: None,
        location: geo_point(&body),
    };
    services.attendance.insert(record.id, record.clone());

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "success": true, "attendance": dto::attendance_to_json(&record) })),
    )
        .into_response())
}

pub async fn check_out(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(current): Extension<CurrentUser>,
    Json(body): Json<AttendanceBody>,
) -> Result<axum::response::Response, ApiError> {
    let principal = current.principal();
    guards::require_permission(&services, principal, MODULE, Action::Edit)?;
    validate_attendance(&body)?;

    let today = today_local();
    let user_id = principal.user_id;

    let open = services
        .attendance
        .list_where(|rec| rec.user_id == user_id && rec.date == today)
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::not_found("no check-in found for today"))?;

    let updated = services
        .attendance
        .update(open.id, |rec| rec.check_out = Some(Utc::now()))
        .ok_or_else(|| ApiError::not_found("no check-in found for today"))?;

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "success": true, "attendance": dto::attendance_to_json(&updated) })),
    )
        .into_response())
}

pub async fn list_attendance(
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

    let mut records = services.attendance.list_where(|rec| {
        guards::passes_company_filter(rec, filter)
            && start.is_none_or(|s| rec.date >= s)
            && end.is_none_or(|e| rec.date <= e)
    });
    records.sort_by_key(|r| r.date);

    let entries: Vec<_> = records.iter().map(dto::attendance_to_json).collect();
    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "success": true, "count": entries.len(), "attendance": entries })),
    )
        .into_response())
}
