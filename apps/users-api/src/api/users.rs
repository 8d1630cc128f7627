//! Users API routes
//!
//! This module wires up the users domain to HTTP routes.

use axum::Router;
use domain_users::{MongoUserStore, UserRepository, handlers};
use tracing::warn;

use crate::state::AppState;

/// Create users router
///
/// Without a MongoDB connection the repository is disconnected and every user
/// endpoint answers 500.
pub fn router(state: &AppState) -> Router {
    let repository = match &state.db {
        Some(db) => UserRepository::new(MongoUserStore::new(db)),
        None => {
            warn!("No MongoDB connection, user endpoints will report errors");
            UserRepository::<MongoUserStore>::disconnected()
        }
    };

    handlers::router(repository)
}
