//! Server infrastructure module.
//!
//! This module provides:
//! - Router assembly with the OpenAPI document, access log and 404 fallback
//! - The liveness endpoint
//! - Graceful shutdown coordination
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_router, health_router};
//! use core_config::app_info;
//!
//! let routes = api_routes.merge(health_router(app_info!()));
//! let router = create_router(routes, ApiDoc::openapi());
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

// Re-export commonly used types and functions
pub use app::{create_production_app, create_router};
pub use health::{HealthResponse, health_router};
pub use shutdown::ShutdownCoordinator;
