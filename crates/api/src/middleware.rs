//! Request-chain gates: identity verification and the coarse role gate.
//!
//! `protect` runs first on every protected route and attaches the resolved
//! [`CurrentUser`]; `role_gate` is layered onto individual route groups with
//! a static allow-list. Fine-grained permission and tenant checks live in
//! `app::guards` and run inside handlers, after these layers.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::Utc;

use staffhub_auth::{check_role, JwtVerifier, Role};
use staffhub_store::UserStore;

use crate::app::errors::ApiError;
use crate::context::CurrentUser;

#[derive(Clone)]
pub struct AuthState {
    pub jwt: Arc<dyn JwtVerifier>,
    pub users: Arc<dyn UserStore>,
}

/// Identity verification middleware.
///
/// Verifies the bearer token and resolves its subject against the user
/// store; the full principal is re-read on every request so role changes and
/// deactivation apply immediately.
pub async fn protect(State(state): State<AuthState>, mut req: Request, next: Next) -> Response {
    let token = match extract_bearer(req.headers()) {
        Ok(t) => t,
        Err(e) => return e.into_response(),
    };

    let claims = match state.jwt.verify(token, Utc::now()) {
        Ok(c) => c,
        Err(e) => {
            return ApiError::unauthenticated(format!("not authenticated: {e}")).into_response();
        }
    };

    let user = match state.users.find_by_id(claims.sub) {
        Ok(Some(user)) => user,
        Ok(None) => {
            return ApiError::unauthenticated("user belonging to this token no longer exists")
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "identity lookup failed");
            return ApiError::internal("authentication failed").into_response();
        }
    };

    if !user.active {
        return ApiError::unauthenticated("account is deactivated").into_response();
    }

    req.extensions_mut().insert(CurrentUser(user.principal()));
    next.run(req).await
}

/// Coarse role gate, layered per route group with a static allow-list.
pub async fn role_gate(allowed: &'static [Role], req: Request, next: Next) -> Response {
    let Some(current) = req.extensions().get::<CurrentUser>() else {
        return ApiError::unauthenticated("not authenticated").into_response();
    };

    match check_role(current.principal().role, allowed) {
        Ok(()) => next.run(req).await,
        Err(e) => ApiError::from(e).into_response(),
    }
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, ApiError> {
    let header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or_else(|| ApiError::unauthenticated("not authenticated: no token provided"))?;

    let header = header
        .to_str()
        .map_err(|_| ApiError::unauthenticated("not authenticated: malformed header"))?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::unauthenticated("not authenticated: malformed header"))?
        .trim();

    if token.is_empty() {
        return Err(ApiError::unauthenticated("not authenticated: no token provided"));
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::AUTHORIZATION;

    #[test]
    fn bearer_extraction() {
        let mut headers = HeaderMap::new();
        assert!(extract_bearer(&headers).is_err());

        headers.insert(AUTHORIZATION, "Token abc".parse().unwrap());
        assert!(extract_bearer(&headers).is_err());

        headers.insert(AUTHORIZATION, "Bearer ".parse().unwrap());
        assert!(extract_bearer(&headers).is_err());

        headers.insert(AUTHORIZATION, "Bearer abc.def.ghi".parse().unwrap());
        assert_eq!(extract_bearer(&headers).unwrap(), "abc.def.ghi");
    }
}
