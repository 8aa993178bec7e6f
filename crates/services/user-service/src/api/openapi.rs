//! OpenAPI documentation.

use utoipa::OpenApi;

use domain::User;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::user_handler::create_user,
        crate::api::handlers::user_handler::get_user,
    ),
    components(schemas(User)),
    tags(
        (name = "Users", description = "User registration and lookup"),
    )
)]
pub struct ApiDoc;
