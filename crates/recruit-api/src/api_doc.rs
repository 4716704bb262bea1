//! OpenAPI documentation

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Recruit API",
        description = "Student club recruitment service: application form, portfolio upload relay, and submission endpoint."
    ),
    paths(
        crate::handlers::upload::upload_portfolio,
        crate::handlers::application::submit_application,
    ),
    components(schemas(
        crate::error::ErrorResponse,
        crate::handlers::upload::UploadResponse,
    )),
    tags(
        (name = "upload", description = "Portfolio upload relay"),
        (name = "applications", description = "Application submission"),
    )
)]
pub struct ApiDoc;
