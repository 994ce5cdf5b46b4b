use utoipa::OpenApi;

pub const DOC_TAG: &str = "Docs";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Quill",
        description = "Document administration API",
    ),
    tags(
        (name = DOC_TAG, description = "Doc management endpoints"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
