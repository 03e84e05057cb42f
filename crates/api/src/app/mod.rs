//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: store wiring shared by all handlers
//! - `routes/`: HTTP routes + handlers (one file per domain area)
//! - `guards.rs`: handler-side permission and tenant checks
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use staffhub_auth::{Hs256JwtVerifier, PermissionGateConfig};

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod guards;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(jwt_secret: &[u8], gate_config: PermissionGateConfig) -> Router {
    build_app_with(jwt_secret, Arc::new(services::AppServices::in_memory(gate_config)))
}

/// Build the router around pre-wired services. Tests use this to seed users
/// and permissions, or to substitute failing stores.
pub fn build_app_with(jwt_secret: &[u8], services: Arc<services::AppServices>) -> Router {
    let auth_state = middleware::AuthState {
        jwt: Arc::new(Hs256JwtVerifier::new(jwt_secret)),
        users: services.users.clone(),
    };

    // Protected routes: identity verification first, then per-group role
    // gates, then handler-side permission/tenant guards.
    let protected = routes::router()
        .layer(Extension(services))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::protect,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(protected)
        .layer(ServiceBuilder::new())
}
