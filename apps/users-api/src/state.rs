//! Application state management.
//!
//! This module defines the shared application state passed to route builders.
//! The state contains:
//! - Configuration
//! - MongoDB client, absent when the server started without a connection

use mongodb::{Client, Database};

use crate::config::Config;

/// Shared application state.
///
/// Cloning is cheap: the MongoDB handles share the driver's connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: Config,
    pub mongo_client: Option<Client>,
    /// Database named by `config.mongodb`
    pub db: Option<Database>,
}

impl AppState {
    pub fn new(config: Config, mongo_client: Option<Client>) -> Self {
        let db = mongo_client
            .as_ref()
            .map(|client| client.database(config.mongodb.database()));

        Self {
            config,
            mongo_client,
            db,
        }
    }
}
