//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Service-level OpenAPI information; paths come from the domain documents
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users API",
        version = "0.1.0",
        description = "MongoDB-backed REST API for managing users",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    )
)]
pub struct ApiDoc;

/// Combined OpenAPI document served at `/api-docs/openapi.json`
pub fn document() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.merge(domain_users::ApiDoc::openapi());
    doc
}
