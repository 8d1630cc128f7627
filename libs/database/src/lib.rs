//! Database connectors and utilities
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB support
//! - `config` - `core_config::FromEnv` support for connection settings
//! - `all` - everything above
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{self, MongoConfig};
//!
//! let config = MongoConfig::default(); // mongodb://localhost:27017, database "api"
//! let client = mongodb::client_from_config(&config).await?;
//! mongodb::wait_until_reachable(&client, None).await?;
//! let db = client.database(config.database());
//! ```

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{DatabaseError, DatabaseResult};
