use async_trait::async_trait;

use crate::error::UserResult;
use crate::models::{UpdateUser, User};

/// Collection-scoped access to stored users, addressed by the `Id` field.
///
/// Implementations report failures as [`UserError`](crate::UserError); mapping those to
/// an outcome is left to [`UserRepository`](crate::UserRepository).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Every stored user, in store order
    async fn find_all(&self) -> UserResult<Vec<User>>;

    async fn find_by_id(&self, id: i64) -> UserResult<Option<User>>;

    async fn insert(&self, user: &User) -> UserResult<()>;

    /// Sets the supplied fields on the user with `id`. Returns the matched count.
    async fn update_fields(&self, id: i64, update: &UpdateUser) -> UserResult<u64>;

    /// Returns the deleted count
    async fn delete(&self, id: i64) -> UserResult<u64>;
}
