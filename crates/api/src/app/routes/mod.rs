use axum::Router;

pub mod attendance;
pub mod expenses;
pub mod leaves;
pub mod settings;
pub mod system;
pub mod tasks;

/// Router for all authenticated endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/auth", system::router())
        .nest("/settings", settings::router())
        .nest("/leaves", leaves::router())
        .nest("/expenses", expenses::router())
        .nest("/tasks", tasks::router())
        .nest("/attendance", attendance::router())
}
