use axum::{extract::Extension, http::StatusCode, response::IntoResponse, routing::get, Json, Router};

use crate::context::CurrentUser;

pub fn router() -> Router {
    Router::new().route("/me", get(me))
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Echo the resolved principal for the presented token.
pub async fn me(Extension(current): Extension<CurrentUser>) -> impl IntoResponse {
    let p = current.principal();
    Json(serde_json::json!({
        "success": true,
        "user": {
            "id": p.user_id.to_string(),
            "role": p.role,
            "company": p.company_id.map(|c| c.to_string()),
            "active": p.active,
        },
    }))
}
