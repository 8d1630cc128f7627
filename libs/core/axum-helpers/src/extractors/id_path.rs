//! Integer path parameter extractor.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use std::convert::Infallible;

/// Extractor for a single integer path parameter.
///
/// Never rejects: holds `None` when the parameter is absent or is not a base-10
/// `i64`, so the handler decides how to answer.
///
/// # Example
/// ```ignore
/// use axum_helpers::IdPath;
///
/// async fn get_user(IdPath(id): IdPath) -> String {
///     match id {
///         Some(id) => format!("User {id}"),
///         None => "Invalid parameters.".to_string(),
///     }
/// }
///
/// let app = Router::new().route("/users/{id}", get(get_user));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub Option<i64>);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let id = Path::<String>::from_request_parts(parts, state)
            .await
            .ok()
            .and_then(|Path(raw)| raw.parse::<i64>().ok());

        Ok(IdPath(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, routing::get};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn extract(uri: &str) -> String {
        let app = Router::new().route(
            "/users/{id}",
            get(|IdPath(id): IdPath| async move { format!("{id:?}") }),
        );

        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_numeric_id() {
        assert_eq!(extract("/users/42").await, "Some(42)");
        assert_eq!(extract("/users/-7").await, "Some(-7)");
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_none() {
        assert_eq!(extract("/users/abc").await, "None");
        assert_eq!(extract("/users/1.5").await, "None");
        assert_eq!(extract("/users/99999999999999999999").await, "None");
    }
}
