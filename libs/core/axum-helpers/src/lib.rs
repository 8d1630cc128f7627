//! # Axum Helpers
//!
//! Utilities and middleware for building Axum web applications.
//!
//! ## Modules
//!
//! - **[`server`]**: Router assembly, health endpoint, graceful shutdown
//! - **[`http`]**: HTTP middleware (access log)
//! - **[`errors`]**: JSON error body and fallback handlers
//! - **[`extractors`]**: Custom extractors (integer id path, optional JSON body)
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::{ShutdownCoordinator, create_production_app, create_router};
//! use core_config::server::ServerConfig;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let routes = Router::new(); // Add your routes
//!     let router = create_router(routes, ApiDoc::openapi());
//!
//!     let (coordinator, _rx) = ShutdownCoordinator::new();
//!     create_production_app(
//!         router,
//!         &ServerConfig::default(),
//!         coordinator,
//!         Duration::from_secs(30),
//!         async {},
//!     )
//!     .await
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export server types
pub use server::{
    HealthResponse, ShutdownCoordinator, create_production_app, create_router, health_router,
};

// Re-export HTTP middleware
pub use http::access_log;

// Re-export error types
pub use errors::ErrorResponse;

// Re-export extractors
pub use extractors::{IdPath, JsonBody};
