use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{admin, page},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pagecraft",
        description = "Page composition API for the marketing site"
    ),
    tags(
        (name = "page", description = "Composed pages and site navigation"),
        (name = "admin", description = "Content operations on pricing data")
    )
)]
struct ApiDoc;

/// Builds the API router and mounts Swagger UI at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(page::get_page))
        .routes(routes!(page::get_page_in_category))
        .routes(routes!(page::get_navigation))
        .routes(routes!(admin::set_popular_plan))
        .routes(routes!(admin::set_default_billing_cycle))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
