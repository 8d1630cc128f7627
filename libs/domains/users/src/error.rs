use thiserror::Error;

/// Store-level failure. Never reaches HTTP callers; the repository logs it and answers
/// with a generic message.
#[derive(Debug, Error)]
pub enum UserError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl From<mongodb::error::Error> for UserError {
    fn from(err: mongodb::error::Error) -> Self {
        UserError::Database(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for UserError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        UserError::Serialization(err.to_string())
    }
}
