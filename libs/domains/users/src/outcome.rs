//! Result of a repository operation: a status plus the payload that status carries.

use strum::Display;

use crate::models::{UpdateUser, User};

pub const INVALID_BODY_DATA: &str = "Invalid body data.";
pub const DUPLICATE_ID: &str = "A user with same Id already exists.";
pub const FETCH_FAILED: &str = "Error fetching users from database.";
pub const WRITE_FAILED: &str = "Error writing user to database.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Ok,
    Error,
    NotFound,
    InvalidData,
    ConflictId,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UserPayload {
    Users(Vec<User>),
    User(User),
    Updated(UpdateUser),
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UserOutcome {
    Ok(UserPayload),
    Error(String),
    NotFound,
    InvalidData(String),
    ConflictId(String),
}

impl UserOutcome {
    pub fn status(&self) -> UserStatus {
        match self {
            UserOutcome::Ok(_) => UserStatus::Ok,
            UserOutcome::Error(_) => UserStatus::Error,
            UserOutcome::NotFound => UserStatus::NotFound,
            UserOutcome::InvalidData(_) => UserStatus::InvalidData,
            UserOutcome::ConflictId(_) => UserStatus::ConflictId,
        }
    }

    /// Message carried by a failure, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            UserOutcome::Error(msg)
            | UserOutcome::InvalidData(msg)
            | UserOutcome::ConflictId(msg) => Some(msg),
            UserOutcome::Ok(_) | UserOutcome::NotFound => None,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, UserOutcome::Ok(_))
    }

    pub(crate) fn fetch_failed() -> Self {
        UserOutcome::Error(FETCH_FAILED.to_string())
    }

    pub(crate) fn write_failed() -> Self {
        UserOutcome::Error(WRITE_FAILED.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(UserStatus::Ok.to_string(), "OK");
        assert_eq!(UserStatus::Error.to_string(), "ERROR");
        assert_eq!(UserStatus::NotFound.to_string(), "NOT_FOUND");
        assert_eq!(UserStatus::InvalidData.to_string(), "INVALID_DATA");
        assert_eq!(UserStatus::ConflictId.to_string(), "CONFLICT_ID");
    }

    #[test]
    fn test_status_and_message() {
        let outcome = UserOutcome::ConflictId(DUPLICATE_ID.to_string());
        assert_eq!(outcome.status(), UserStatus::ConflictId);
        assert_eq!(outcome.message(), Some(DUPLICATE_ID));

        assert_eq!(UserOutcome::NotFound.message(), None);
        assert!(UserOutcome::Ok(UserPayload::Empty).is_ok());
        assert_eq!(UserOutcome::fetch_failed().message(), Some(FETCH_FAILED));
    }
}
