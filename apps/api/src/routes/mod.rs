pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::audit::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/audits/preview",
            post(handlers::handle_preview_audit),
        )
        .route(
            "/api/v1/athletes/:athlete_id/audits",
            post(handlers::handle_run_audit).get(handlers::handle_audit_history),
        )
        .route(
            "/api/v1/athletes/:athlete_id/audits/latest",
            get(handlers::handle_latest_audit),
        )
        .with_state(state)
}
