//! HTTP middleware module.
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::access_log;
//!
//! let app = Router::new().layer(axum::middleware::from_fn(access_log));
//! ```

pub mod access_log;

pub use access_log::{AccessLogEntry, access_log, format_duration};
