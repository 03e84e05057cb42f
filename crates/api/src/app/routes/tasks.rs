//! Task endpoints.
//!
//! Task creation exercises the peer-principal guard: when the payload names
//! an assignee, that user must belong to the caller's company.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use chrono::Utc;

use staffhub_auth::Action;
use staffhub_core::{today_local, RecordId};
use staffhub_store::TaskRecord;
use staffhub_validation::{
    validate_record_id, validate_task, validate_task_progress, validate_user_id, TaskBody,
};

use crate::app::errors::ApiError;
use crate::app::services::AppServices;
use crate::app::{dto, guards};
use crate::context::CurrentUser;

const MODULE: &str = "tasks";

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_task).get(list_tasks))
        .route("/:id", get(get_task))
        .route("/:id/progress", put(update_task_progress))
}

pub async fn create_task(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(current): Extension<CurrentUser>,
    Json(body): Json<TaskBody>,
) -> Result<axum::response::Response, ApiError> {
    let principal = current.principal();
    guards::require_permission(&services, principal, MODULE, Action::Create)?;
    validate_task(&body, today_local())?;

    let assigned_to = match body.assigned_to.as_deref() {
        Some(raw) => Some(validate_user_id(raw)?),
        None => None,
    };
    guards::verify_user_company_access(&services, principal, assigned_to)?;

    let due_date = match body.due_date.as_deref() {
        Some(raw) => Some(dto::parsed_date(Some(raw), "due date")?),
        None => None,
    };

    let record = TaskRecord {
        id: RecordId::new(),
        company_id: principal.company_id,
        created_by: principal.user_id,
        assigned_to,
        title: body.title.clone().unwrap_or_default(),
        description: body.description.clone(),
        priority: body
            .priority
            .clone()
            .unwrap_or_else(|| "medium".to_string())
            .to_lowercase(),
        due_date,
        progress: body
            .progress
            .as_ref()
            .and_then(|p| p.as_f64())
            .map(|p| p as u8)
            .unwrap_or(0),
        created_at: Utc::now(),
    };
    services.tasks.insert(record.id, record.clone());

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "success": true, "task": dto::task_to_json(&record) })),
    )
        .into_response())
}

pub async fn list_tasks(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(current): Extension<CurrentUser>,
    Query(query): Query<dto::ListQuery>,
) -> Result<axum::response::Response, ApiError> {
    let principal = current.principal();
    guards::require_permission(&services, principal, MODULE, Action::View)?;

    let filter = guards::scope_to_company(principal, query.company_filter()?)?;

    let mut records = services
        .tasks
        .list_where(|rec| guards::passes_company_filter(rec, filter));
    records.sort_by_key(|r| r.created_at);

    let tasks: Vec<_> = records.iter().map(dto::task_to_json).collect();
    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "success": true, "count": tasks.len(), "tasks": tasks })),
    )
        .into_response())
}

pub async fn get_task(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<axum::response::Response, ApiError> {
    let principal = current.principal();
    guards::require_permission(&services, principal, MODULE, Action::View)?;

    let id = validate_record_id(&id)?;
    let record = guards::enforce_company_access(principal, services.tasks.get(id), "task")?;

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "success": true, "task": dto::task_to_json(&record) })),
    )
        .into_response())
}

pub async fn update_task_progress(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateTaskProgressRequest>,
) -> Result<axum::response::Response, ApiError> {
    let principal = current.principal();
    guards::require_permission(&services, principal, MODULE, Action::Edit)?;
    validate_task_progress(body.progress.as_ref())?;

    let progress = body
        .progress
        .as_ref()
        .and_then(|p| p.as_f64())
        .ok_or_else(|| ApiError::internal("missing progress after validation"))?
        as u8;

    let id = validate_record_id(&id)?;
    guards::enforce_company_access(principal, services.tasks.get(id), "task")?;

    let updated = services
        .tasks
        .update(id, |rec| rec.progress = progress)
        .ok_or_else(|| ApiError::not_found("task not found"))?;

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "success": true, "task": dto::task_to_json(&updated) })),
    )
        .into_response())
}
