//! Role-permission matrix administration.
//!
//! The whole group sits behind an admin-only role gate; these are the only
//! write paths into the permission store.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use staffhub_auth::{ModulePermission, Role, RolePermissionRecord};

use crate::app::errors::ApiError;
use crate::app::services::AppServices;
use crate::middleware::role_gate;

pub fn router() -> Router {
    Router::new()
        .route("/permissions", get(list_permissions))
        .route("/permissions/:role", get(get_permissions).put(upsert_permissions))
        .route_layer(axum::middleware::from_fn(|req, next| {
            role_gate(&[Role::Admin], req, next)
        }))
}

#[derive(Debug, Deserialize)]
pub struct UpsertPermissionsRequest {
    pub permissions: Vec<ModulePermission>,
}

pub async fn list_permissions(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<axum::response::Response, ApiError> {
    let records = services
        .role_permissions
        .list_active()
        .map_err(|e| ApiError::internal(e.to_string()))?;

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "success": true, "permissions": records })),
    )
        .into_response())
}

pub async fn get_permissions(
    Extension(services): Extension<Arc<AppServices>>,
    Path(role): Path<String>,
) -> Result<axum::response::Response, ApiError> {
    let role = parse_role(&role)?;

    let record = services
        .role_permissions
        .find_active(role)
        .map_err(|e| ApiError::internal(e.to_string()))?
        .ok_or_else(|| ApiError::not_found(format!("no permissions configured for role '{role}'")))?;

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "success": true, "permissions": record })),
    )
        .into_response())
}

pub async fn upsert_permissions(
    Extension(services): Extension<Arc<AppServices>>,
    Path(role): Path<String>,
    Json(body): Json<UpsertPermissionsRequest>,
) -> Result<axum::response::Response, ApiError> {
    let role = parse_role(&role)?;

    let record = RolePermissionRecord::new(role, body.permissions);
    services
        .role_permissions
        .upsert(record.clone())
        .map_err(|e| ApiError::internal(e.to_string()))?;

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "success": true, "permissions": record })),
    )
        .into_response())
}

fn parse_role(raw: &str) -> Result<Role, ApiError> {
    raw.parse::<Role>().map_err(|e| ApiError::not_found(e.to_string()))
}
