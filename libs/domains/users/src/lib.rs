//! Users Domain
//!
//! CRUD over a single `users` collection in MongoDB.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, request shape checks, status mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Domain operations, store errors folded into UserOutcome
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │    Store    │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← User, UpdateUser
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{MongoUserStore, UserRepository, handlers};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let store = MongoUserStore::new(&client.database("api"));
//!
//! let router = handlers::router(UserRepository::new(store));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongo;
pub mod outcome;
pub mod repository;
pub mod store;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use handlers::ApiDoc;
pub use models::{UpdateUser, User};
pub use mongo::MongoUserStore;
pub use outcome::{UserOutcome, UserPayload, UserStatus};
pub use repository::UserRepository;
pub use store::UserStore;
