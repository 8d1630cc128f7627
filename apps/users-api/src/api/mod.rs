//! API routes module
//!
//! This module defines all HTTP routes of the users API. Routes are mounted at the root.

pub mod health;
pub mod users;

use axum::Router;
use axum_helpers::health_router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(users::router(state))
        .merge(health::router(state.clone()))
        .merge(health_router(state.config.app))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn disconnected_app() -> Router {
        let config = temp_env::with_vars_unset(["HOST", "PORT", "APP_ENV"], || {
            Config::from_env().unwrap()
        });
        let state = AppState::new(config, None);
        axum_helpers::create_router(routes(&state), crate::openapi::document())
    }

    async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .clone()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_users_without_mongodb_answer_500() {
        let app = disconnected_app();

        let (status, body) = get(&app, "/users").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Error fetching users from database.");
    }

    #[tokio::test]
    async fn test_health_and_readiness_without_mongodb() {
        let app = disconnected_app();

        let (status, body) = get(&app, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("healthy"));

        let (status, body) = get(&app, "/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["mongodb"], false);
    }

    #[tokio::test]
    async fn test_unknown_path_is_404() {
        let (status, _) = get(&disconnected_app(), "/accounts").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_openapi_document_includes_users() {
        let (status, body) = get(&disconnected_app(), "/api-docs/openapi.json").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(json["paths"]["/users/{id}"].is_object());
        assert_eq!(json["info"]["title"], "Users API");
    }
}
