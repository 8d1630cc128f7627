//! MongoDB implementation of UserStore

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Document, doc, to_document},
};
use tracing::instrument;

use crate::error::UserResult;
use crate::models::{UpdateUser, User};
use crate::store::UserStore;

/// Default collection name
pub const USERS_COLLECTION: &str = "users";

pub struct MongoUserStore {
    collection: Collection<User>,
}

impl MongoUserStore {
    /// Create a store over the `users` collection of `db`
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let store = MongoUserStore::new(&client.database("api"));
    /// ```
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, USERS_COLLECTION)
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection::<User>(collection_name),
        }
    }

    pub fn collection(&self) -> &Collection<User> {
        &self.collection
    }

    fn id_filter(id: i64) -> Document {
        doc! { "Id": id }
    }

    fn set_document(update: &UpdateUser) -> UserResult<Document> {
        Ok(doc! { "$set": to_document(update)? })
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    #[instrument(skip(self))]
    async fn find_all(&self) -> UserResult<Vec<User>> {
        let cursor = self.collection.find(doc! {}).await?;
        let users: Vec<User> = cursor.try_collect().await?;
        Ok(users)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let user = self.collection.find_one(Self::id_filter(id)).await?;
        Ok(user)
    }

    #[instrument(skip(self, user), fields(user_id = user.id))]
    async fn insert(&self, user: &User) -> UserResult<()> {
        self.collection.insert_one(user).await?;
        tracing::info!("User inserted");
        Ok(())
    }

    #[instrument(skip(self, update))]
    async fn update_fields(&self, id: i64, update: &UpdateUser) -> UserResult<u64> {
        let result = self
            .collection
            .update_one(Self::id_filter(id), Self::set_document(update)?)
            .await?;
        Ok(result.matched_count)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> UserResult<u64> {
        let result = self.collection.delete_one(Self::id_filter(id)).await?;
        Ok(result.deleted_count)
    }
}
