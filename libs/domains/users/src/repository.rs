use std::sync::Arc;
use tracing::{error, instrument};

use crate::models::{UpdateUser, User};
use crate::outcome::{DUPLICATE_ID, INVALID_BODY_DATA, UserOutcome, UserPayload};
use crate::store::UserStore;

/// User operations over an optional store.
///
/// Every operation answers with a [`UserOutcome`]; store errors are logged and folded
/// into [`UserOutcome::Error`]. A repository built with [`disconnected`](Self::disconnected)
/// answers `Error` to everything.
pub struct UserRepository<S> {
    store: Option<Arc<S>>,
}

impl<S> Clone for UserRepository<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S: UserStore> UserRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Some(Arc::new(store)),
        }
    }

    /// A repository without a store
    pub fn disconnected() -> Self {
        Self { store: None }
    }

    pub fn is_connected(&self) -> bool {
        self.store.is_some()
    }

    #[instrument(skip(self))]
    pub async fn get_users(&self) -> UserOutcome {
        let Some(store) = &self.store else {
            return UserOutcome::fetch_failed();
        };

        match store.find_all().await {
            Ok(users) => UserOutcome::Ok(UserPayload::Users(users)),
            Err(e) => {
                error!(error = %e, "Failed to list users");
                UserOutcome::fetch_failed()
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn get_user_with_id(&self, id: i64) -> UserOutcome {
        let Some(store) = &self.store else {
            return UserOutcome::fetch_failed();
        };

        match store.find_by_id(id).await {
            Ok(Some(user)) => UserOutcome::Ok(UserPayload::User(user)),
            Ok(None) => UserOutcome::NotFound,
            Err(e) => {
                error!(error = %e, "Failed to fetch user");
                UserOutcome::fetch_failed()
            }
        }
    }

    /// Inserts `user` unless a user with the same `Id` is found first.
    ///
    /// The lookup and the insert are separate store calls, so two concurrent creates
    /// with one `Id` can both succeed.
    #[instrument(skip(self, user), fields(user_id = user.as_ref().map(|u| u.id)))]
    pub async fn create_user(&self, user: Option<User>) -> UserOutcome {
        let Some(store) = &self.store else {
            return UserOutcome::fetch_failed();
        };
        let Some(user) = user else {
            return UserOutcome::InvalidData(INVALID_BODY_DATA.to_string());
        };

        if self.get_user_with_id(user.id).await.is_ok() {
            return UserOutcome::ConflictId(DUPLICATE_ID.to_string());
        }

        match store.insert(&user).await {
            Ok(()) => UserOutcome::Ok(UserPayload::User(user)),
            Err(e) => {
                error!(error = %e, "Failed to insert user");
                UserOutcome::write_failed()
            }
        }
    }

    #[instrument(skip(self, update))]
    pub async fn update_user_with_id(&self, id: i64, update: Option<UpdateUser>) -> UserOutcome {
        let Some(store) = &self.store else {
            return UserOutcome::fetch_failed();
        };
        let Some(update) = update.filter(|u| !u.is_empty()) else {
            return UserOutcome::InvalidData(INVALID_BODY_DATA.to_string());
        };

        match store.update_fields(id, &update).await {
            Ok(0) => UserOutcome::NotFound,
            Ok(_) => UserOutcome::Ok(UserPayload::Updated(update)),
            Err(e) => {
                error!(error = %e, "Failed to update user");
                UserOutcome::write_failed()
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn delete_user_with_id(&self, id: i64) -> UserOutcome {
        let Some(store) = &self.store else {
            return UserOutcome::fetch_failed();
        };

        match store.delete(id).await {
            Ok(0) => UserOutcome::NotFound,
            Ok(_) => UserOutcome::Ok(UserPayload::Empty),
            Err(e) => {
                error!(error = %e, "Failed to delete user");
                UserOutcome::write_failed()
            }
        }
    }
}
