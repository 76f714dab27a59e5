use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::routes::locations::add_locations,
        crate::api::routes::locations::nearest_one,
        crate::api::routes::locations::nearest_within,
        crate::api::routes::health,
        crate::api::routes::ready,
    ),
    components(
        schemas(
            crate::api::dtos::AddLocationsRequest,
            crate::api::dtos::NewLocationRequest,
            crate::api::dtos::AddLocationsResponse,
            crate::api::dtos::LocationResponse,
            crate::api::dtos::NearestLocationResponse,
            crate::api::dtos::NearestLocationsResponse,
            crate::api::dtos::ErrorResponse,
        )
    ),
    tags(
        (name = "locations", description = "Location ingestion and proximity queries"),
        (name = "health", description = "Health check endpoints"),
    ),
    info(
        title = "Locations API",
        version = "0.1.0",
        description = "Stores named coordinates and answers nearest-location queries"
    )
)]
pub struct ApiDoc;

pub fn configure_swagger_ui(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}
