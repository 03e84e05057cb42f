//! Expense claim endpoints.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;

use staffhub_auth::Action;
use staffhub_core::{today_local, RecordId};
use staffhub_store::ExpenseRecord;
use staffhub_validation::{validate_date_range, validate_expense, validate_record_id, ExpenseBody};

use crate::app::errors::ApiError;
use crate::app::services::AppServices;
use crate::app::{dto, guards};
use crate::context::CurrentUser;

const MODULE: &str = "expenses";

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_expense).get(list_expenses))
        .route("/:id", get(get_expense))
}

pub async fn create_expense(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(current): Extension<CurrentUser>,
    Json(body): Json<ExpenseBody>,
) -> Result<axum::response::Response, ApiError> {
    let principal = current.principal();
    guards::require_permission(&services, principal, MODULE, Action::Create)?;
    validate_expense(&body, today_local())?;

    let amount = body
        .amount
        .as_ref()
        .and_then(|a| a.as_f64())
        .ok_or_else(|| ApiError::internal("missing amount after validation"))?;

    let record = ExpenseRecord {
        id: RecordId::new(),
        company_id: principal.company_id,
        user_id: principal.user_id,
        title: body.title.clone().unwrap_or_default(),
        amount,
        category: body.category.clone().unwrap_or_default().to_lowercase(),
        date: dto::parsed_date(body.date.as_deref(), "date")?,
        created_at: Utc::now(),
    };
    services.expenses.insert(record.id, record.clone());

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "success": true, "expense": dto::expense_to_json(&record) })),
    )
        .into_response())
}

pub async fn list_expenses(
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

    let mut records = services.expenses.list_where(|rec| {
        guards::passes_company_filter(rec, filter)
            && start.is_none_or(|s| rec.date >= s)
            && end.is_none_or(|e| rec.date <= e)
    });
    records.sort_by_key(|r| r.created_at);

    let expenses: Vec<_> = records.iter().map(dto::expense_to_json).collect();
    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "success": true, "count": expenses.len(), "expenses": expenses })),
    )
        .into_response())
}

pub async fn get_expense(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<axum::response::Response, ApiError> {
    let principal = current.principal();
    guards::require_permission(&services, principal, MODULE, Action::View)?;

    let id = validate_record_id(&id)?;
    let record = guards::enforce_company_access(principal, services.expenses.get(id), "expense")?;

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "success": true, "expense": dto::expense_to_json(&record) })),
    )
        .into_response())
}
