use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::{IdPath, JsonBody};
use tracing::debug;
use utoipa::OpenApi;

use crate::models::{UpdateUser, User};
use crate::outcome::{UserOutcome, UserPayload, UserStatus};
use crate::repository::UserRepository;
use crate::store::UserStore;

pub const INVALID_PARAMETERS: &str = "Invalid parameters.";
pub const INVALID_BODY: &str = "Invalid body.";
pub const INVALID_BODY_OR_PARAMETERS: &str = "Invalid body or parameters.";

/// OpenAPI documentation for Users API
#[derive(OpenApi)]
#[openapi(
    paths(list_users, create_user, get_user, update_user, delete_user),
    components(schemas(User, UpdateUser)),
    tags(
        (name = "Users", description = "User management endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Create the users router: `/users` and `/users/{id}`
pub fn router<S: UserStore + 'static>(repository: UserRepository<S>) -> Router {
    Router::new()
        .route("/users", get(list_users::<S>).post(create_user::<S>))
        .route(
            "/users/{id}",
            get(get_user::<S>)
                .put(update_user::<S>)
                .delete(delete_user::<S>),
        )
        .with_state(repository)
}

impl From<UserStatus> for StatusCode {
    fn from(status: UserStatus) -> Self {
        match status {
            UserStatus::Ok => StatusCode::OK,
            UserStatus::NotFound => StatusCode::NOT_FOUND,
            UserStatus::InvalidData => StatusCode::BAD_REQUEST,
            UserStatus::Error => StatusCode::INTERNAL_SERVER_ERROR,
            UserStatus::ConflictId => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for UserOutcome {
    fn into_response(self) -> Response {
        let status = StatusCode::from(self.status());
        match self {
            UserOutcome::Ok(UserPayload::Users(users)) => (status, Json(users)).into_response(),
            UserOutcome::Ok(UserPayload::User(user)) => (status, Json(user)).into_response(),
            UserOutcome::Ok(UserPayload::Updated(update)) => {
                (status, Json(update)).into_response()
            }
            UserOutcome::Ok(UserPayload::Empty) | UserOutcome::NotFound => {
                status.into_response()
            }
            UserOutcome::Error(msg)
            | UserOutcome::InvalidData(msg)
            | UserOutcome::ConflictId(msg) => (status, msg).into_response(),
        }
    }
}

fn bad_request(message: &'static str) -> Response {
    (StatusCode::BAD_REQUEST, message).into_response()
}

fn log_malformed<T>(body: &JsonBody<T>) {
    if let JsonBody::Malformed(e) = body {
        debug!(error = %e, "Request body does not match the user shape");
    }
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "List of users", body = Vec<User>),
        (status = 500, description = "Store unavailable", body = String, content_type = "text/plain")
    )
)]
async fn list_users<S: UserStore>(State(repository): State<UserRepository<S>>) -> Response {
    repository.get_users().await.into_response()
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = User,
    responses(
        (status = 200, description = "User created", body = User),
        (status = 400, description = "Missing or invalid body", body = String, content_type = "text/plain"),
        (status = 409, description = "A user with the same Id exists", body = String, content_type = "text/plain"),
        (status = 500, description = "Store unavailable", body = String, content_type = "text/plain")
    )
)]
async fn create_user<S: UserStore>(
    State(repository): State<UserRepository<S>>,
    body: JsonBody<User>,
) -> Response {
    if body.is_missing() {
        return bad_request(INVALID_BODY);
    }
    log_malformed(&body);

    repository.create_user(body.into_option()).await.into_response()
}

/// Get a user by Id
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User Id")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 400, description = "Id is not an integer", body = String, content_type = "text/plain"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Store unavailable", body = String, content_type = "text/plain")
    )
)]
async fn get_user<S: UserStore>(
    State(repository): State<UserRepository<S>>,
    IdPath(id): IdPath,
) -> Response {
    let Some(id) = id else {
        return bad_request(INVALID_PARAMETERS);
    };

    repository.get_user_with_id(id).await.into_response()
}

/// Update the supplied fields of a user
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User Id")
    ),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "Submitted update", body = UpdateUser),
        (status = 400, description = "Missing or invalid body or Id", body = String, content_type = "text/plain"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Store unavailable", body = String, content_type = "text/plain")
    )
)]
async fn update_user<S: UserStore>(
    State(repository): State<UserRepository<S>>,
    IdPath(id): IdPath,
    body: JsonBody<UpdateUser>,
) -> Response {
    let Some(id) = id.filter(|_| !body.is_missing()) else {
        return bad_request(INVALID_BODY_OR_PARAMETERS);
    };
    log_malformed(&body);

    repository
        .update_user_with_id(id, body.into_option())
        .await
        .into_response()
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User Id")
    ),
    responses(
        (status = 200, description = "User deleted"),
        (status = 400, description = "Id is not an integer", body = String, content_type = "text/plain"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Store unavailable", body = String, content_type = "text/plain")
    )
)]
async fn delete_user<S: UserStore>(
    State(repository): State<UserRepository<S>>,
    IdPath(id): IdPath,
) -> Response {
    let Some(id) = id else {
        return bad_request(INVALID_PARAMETERS);
    };

    repository.delete_user_with_id(id).await.into_response()
}
