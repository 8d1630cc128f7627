use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// User document.
///
/// Field names are PascalCase on the wire and in MongoDB. Unset optional fields are
/// left out of both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    /// Caller-supplied identifier. Integral doubles written by other clients are read
    /// as integers.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Stored as sent, e.g. `1990-04-12`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,
}

impl User {
    /// A user with only the identifier set
    pub fn new(id: i64) -> Self {
        Self {
            id,
            name: None,
            email: None,
            city: None,
            enabled: None,
            gender: None,
            profession: None,
            description: None,
            birthdate: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Partial update. Only the fields present are written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,
}

impl UpdateUser {
    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    struct IdVisitor;

    impl Visitor<'_> for IdVisitor {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an integer Id")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
            i64::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
            // 2^63 itself does not fit, hence the strict upper bound
            if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
                Ok(v as i64)
            } else {
                Err(E::invalid_value(Unexpected::Float(v), &self))
            }
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_serializes_pascal_case_without_nulls() {
        let user = User::new(1).with_name("A");
        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            json!({"Id": 1, "Name": "A"})
        );
    }

    #[test]
    fn test_user_requires_id() {
        assert!(serde_json::from_value::<User>(json!({"Name": "A"})).is_err());
        assert!(serde_json::from_value::<User>(json!({"Id": "one"})).is_err());
    }

    #[test]
    fn test_user_ignores_store_id() {
        let user: User = serde_json::from_value(json!({
            "_id": "665f1c2e8b3e4a0012345678",
            "Id": 7,
            "Enabled": true,
            "Birthdate": "1990-04-12"
        }))
        .unwrap();

        assert_eq!(user.id, 7);
        assert_eq!(user.enabled, Some(true));
        assert_eq!(user.birthdate.as_deref(), Some("1990-04-12"));
    }

    #[test]
    fn test_user_reads_integral_double_id() {
        use mongodb::bson::{doc, from_document};

        let user: User = from_document(doc! { "Id": 1.0, "Name": "A" }).unwrap();
        assert_eq!(user, User::new(1).with_name("A"));

        let user: User = from_document(doc! { "Id": 7_i32 }).unwrap();
        assert_eq!(user.id, 7);

        assert!(from_document::<User>(doc! { "Id": 1.5 }).is_err());
        assert!(from_document::<User>(doc! { "Id": "1" }).is_err());

        let user: User = serde_json::from_value(json!({"Id": 2.0})).unwrap();
        assert_eq!(user.id, 2);
    }

    #[test]
    fn test_update_user_is_empty() {
        let update: UpdateUser = serde_json::from_value(json!({})).unwrap();
        assert!(update.is_empty());

        let update: UpdateUser = serde_json::from_value(json!({"City": "Oslo"})).unwrap();
        assert!(!update.is_empty());
        assert_eq!(serde_json::to_value(&update).unwrap(), json!({"City": "Oslo"}));
    }
}
