//! OpenAPI document exposed through Swagger UI in debug builds.

use utoipa::OpenApi;

/// Aggregated API documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "user-api",
        description = "Minimal user record CRUD service backed by PostgreSQL"
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        crate::domain::User,
        crate::domain::Error,
        crate::inbound::http::users::UserPayload,
        crate::inbound::http::users::DeletionConfirmation,
    )),
    tags(
        (name = "users", description = "User record CRUD operations"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;
