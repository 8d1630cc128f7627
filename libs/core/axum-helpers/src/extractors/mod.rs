//! Custom extractors for Axum handlers.
//!
//! Both extractors defer the "is the request well-formed" decision to the handler, so
//! each endpoint can answer with its own message.

pub mod id_path;
pub mod json_body;

pub use id_path::IdPath;
pub use json_body::JsonBody;
