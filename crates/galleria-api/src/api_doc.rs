//! OpenAPI documentation

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Galleria API",
        description = "Browse, search, filter, and upload gallery images"
    ),
    paths(
        crate::handlers::images::list_images,
        crate::handlers::images::get_image,
        crate::handlers::images::upload_image,
        crate::handlers::images::update_image,
        crate::handlers::images::delete_image,
        crate::handlers::images::list_related_images,
    ),
    components(schemas(
        galleria_core::models::Image,
        galleria_core::models::Category,
        galleria_core::models::Dimensions,
        galleria_core::models::UpdateImage,
        crate::error::ErrorResponse,
    )),
    tags(
        (name = "images", description = "Image gallery operations")
    )
)]
pub struct ApiDoc;
