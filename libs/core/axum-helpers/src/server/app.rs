use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use crate::http::access_log;
use axum::{Json, Router, middleware, routing::get};
use core_config::server::ServerConfig;
use std::io;
use std::time::Duration;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::openapi::OpenApi;

/// Path the OpenAPI document is served from.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Wraps the application routes with the cross-cutting concerns every service shares.
///
/// This sets up:
/// - `GET /api-docs/openapi.json` serving `openapi`
/// - the JSON 404 fallback for unmatched paths
/// - a tracing span per request
/// - the access log, outermost, so every request (matched or not) produces one line
///
/// Routes are mounted as given; nothing is nested under a prefix.
///
/// # Example
/// ```ignore
/// use axum::{Router, routing::get};
/// use axum_helpers::server::create_router;
/// use utoipa::OpenApi;
///
/// let routes = Router::new().route("/users", get(list_users)).with_state(state);
/// let router = create_router(routes, ApiDoc::openapi());
/// ```
pub fn create_router(routes: Router, openapi: OpenApi) -> Router {
    Router::new()
        .route(
            OPENAPI_PATH,
            get(move || {
                let document = openapi.clone();
                async move { Json(document) }
            }),
        )
        .merge(routes)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
        )
        .layer(middleware::from_fn(access_log))
}

/// Serves `router` until `coordinator` observes SIGINT/SIGTERM or a programmatic
/// [`ShutdownCoordinator::shutdown`].
///
/// On shutdown the listener stops accepting connections and in-flight requests are
/// allowed to finish. `cleanup` (closing database clients and so on) runs once the
/// signal arrives, bounded by `shutdown_timeout`.
///
/// # Errors
/// Returns an error if the listener cannot bind or the server fails while running.
///
/// # Example
/// ```ignore
/// let (coordinator, _rx) = ShutdownCoordinator::new();
/// create_production_app(router, &config, coordinator, Duration::from_secs(30), async move {
///     client.shutdown().await;
/// })
/// .await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    coordinator: ShutdownCoordinator,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let cleanup_signal = coordinator.clone();
    let cleanup_handle = tokio::spawn(async move {
        cleanup_signal.wait_for_signal().await;

        info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(()) => info!("Cleanup completed successfully"),
            Err(_) => tracing::warn!(
                "Cleanup exceeded timeout of {:?}, continuing shutdown",
                shutdown_timeout
            ),
        }
    });

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { coordinator.wait_for_signal().await })
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    cleanup_handle.await.ok();

    serve_result
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use utoipa::openapi::{Info, Paths};

    fn app() -> Router {
        let routes = Router::new().route("/ping", get(|| async { "pong" }));
        let document = OpenApi::new(Info::new("test", "0.1.0"), Paths::new());
        create_router(routes, document)
    }

    #[tokio::test]
    async fn test_routes_are_mounted_at_root() {
        let response = app()
            .oneshot(Request::get("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"pong");
    }

    #[tokio::test]
    async fn test_unknown_path_hits_json_fallback() {
        let response = app()
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "NotFound");
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let response = app()
            .oneshot(Request::get(OPENAPI_PATH).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json.get("openapi").is_some());
    }
}
