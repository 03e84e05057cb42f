use std::sync::Arc;

use staffhub_api::app::{build_app_with, services::AppServices};
use staffhub_auth::{PermissionGateConfig, Role};
use staffhub_store::{UserRecord, UserStore};

#[tokio::main]
async fn main() {
    staffhub_observability::init();

    let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
        tracing::warn!("JWT_SECRET not set; using insecure dev default");
        "dev-secret".to_string()
    });

    let fail_open = std::env::var("PERMISSION_FAIL_OPEN")
        .ok()
        .and_then(|v| v.parse::<bool>().ok())
        .unwrap_or(true);
    let gate_config = PermissionGateConfig { fail_open };

    let services = Arc::new(AppServices::in_memory(gate_config));
    seed_bootstrap_admin(&services);

    let app = build_app_with(jwt_secret.as_bytes(), services);

    let bind = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {bind}: {e}"));

    match listener.local_addr() {
        Ok(addr) => tracing::info!("listening on {addr}"),
        Err(_) => tracing::info!("listening on {bind}"),
    }

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server exited");
    }
}

/// Seed an admin account from the environment so a fresh in-memory instance
/// is reachable. Skipped unless `BOOTSTRAP_ADMIN_ID` is set.
fn seed_bootstrap_admin(services: &AppServices) {
    let Ok(raw_id) = std::env::var("BOOTSTRAP_ADMIN_ID") else {
        return;
    };
    let id = match raw_id.parse() {
        Ok(id) => id,
        Err(_) => {
            tracing::error!("BOOTSTRAP_ADMIN_ID is not a valid UUID; skipping admin seed");
            return;
        }
    };
    let email =
        std::env::var("BOOTSTRAP_ADMIN_EMAIL").unwrap_or_else(|_| "admin@localhost".to_string());

    let record = UserRecord {
        id,
        email,
        display_name: "Bootstrap Admin".to_string(),
        role: Role::Admin,
        company_id: None,
        active: true,
    };
    if let Err(e) = services.users.insert(record) {
        tracing::error!(error = %e, "failed to seed bootstrap admin");
    } else {
        tracing::info!(user = %raw_id, "seeded bootstrap admin");
    }
}
