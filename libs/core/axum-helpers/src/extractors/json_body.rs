//! JSON body extractor that keeps "no body" and "unparsable body" apart.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// Request body, deserialized as JSON when present.
///
/// The `Content-Type` header is not inspected. A body made only of whitespace counts
/// as [`JsonBody::Missing`].
///
/// # Example
/// ```ignore
/// use axum_helpers::JsonBody;
///
/// async fn create_user(body: JsonBody<User>) -> Response {
///     if body.is_missing() {
///         return (StatusCode::BAD_REQUEST, "Invalid body.").into_response();
///     }
///     let user: Option<User> = body.into_option();
///     // ...
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum JsonBody<T> {
    /// The request carried no body
    Missing,
    /// A body was sent but did not deserialize into `T`; holds the serde error
    Malformed(String),
    Parsed(T),
}

impl<T> JsonBody<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, JsonBody::Missing)
    }

    /// The parsed value, if any
    pub fn into_option(self) -> Option<T> {
        match self {
            JsonBody::Parsed(value) => Some(value),
            JsonBody::Missing | JsonBody::Malformed(_) => None,
        }
    }
}

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonBody::Missing);
        }

        Ok(match serde_json::from_slice::<T>(&bytes) {
            Ok(value) => JsonBody::Parsed(value),
            Err(e) => JsonBody::Malformed(e.to_string()),
        })
    }
}
