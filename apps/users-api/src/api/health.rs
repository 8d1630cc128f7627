//! Readiness endpoint

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;
use tracing::warn;

use crate::state::AppState;

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    mongodb: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_time_ms: Option<u64>,
}

/// Create a readiness router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Readiness check - pings MongoDB, 503 when it is unreachable or was never connected
async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    let Some(client) = &state.mongo_client else {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadinessResponse {
                status: "unhealthy",
                mongodb: false,
                response_time_ms: None,
            }),
        );
    };

    let health = database::mongodb::check_health_detailed(client).await;
    if let Some(message) = &health.message {
        warn!(error = %message, "MongoDB readiness ping failed");
    }

    let status = if health.healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(ReadinessResponse {
            status: if health.healthy { "ready" } else { "unhealthy" },
            mongodb: health.healthy,
            response_time_ms: Some(health.response_time_ms),
        }),
    )
}
