//! MongoDB connector and utilities
//!
//! Provides connection management and MongoDB-specific helpers.

mod config;
mod connector;
mod health;

pub use config::MongoConfig;
pub use connector::{client_from_config, connect, connect_from_config, wait_until_reachable};
pub use health::{HealthStatus, check_health_detailed, ping};

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};
