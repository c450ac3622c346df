//! Readiness endpoint

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use serde_json::Value;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Readiness check - pings MongoDB
#[utoipa::path(
    get,
    path = "/ready",
    tag = "Service",
    responses(
        (status = 200, description = "MongoDB reachable", body = Object,
            example = json!({"status": "ready", "mongodb": "connected"})),
        (status = 503, description = "MongoDB unreachable", body = Object,
            example = json!({"status": "not ready", "mongodb": "disconnected"}))
    )
)]
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "mongodb",
        Box::pin(async {
            let status = database::mongodb::check_health_detailed(&state.mongo_client).await;
            tracing::debug!(response_time_ms = status.response_time_ms, "MongoDB ping");
            match status.message {
                None if status.healthy => Ok(()),
                message => Err(message.unwrap_or_else(|| "ping failed".to_string())),
            }
        }),
    )];

    match run_health_checks(checks).await {
        Ok(ready) => ready,
        Err(not_ready) => not_ready,
    }
}
