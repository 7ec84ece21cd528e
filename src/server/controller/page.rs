use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        page::{NavigationDto, PageRenderDto},
    },
    server::{
        error::AppError,
        service::{
            composition::{adapter::RenderScope, PageCompositionService},
            navigation::NavigationService,
        },
        state::AppState,
    },
};

/// Tag for grouping page endpoints in OpenAPI documentation
pub static PAGE_TAG: &str = "page";

/// Get a composed page.
///
/// Resolves the page by slug and returns its visible sections, fully hydrated and in
/// display order. Sections that fail to load are left out of `sections` and listed in
/// `omitted`; they never fail the request.
///
/// # Arguments
/// - `state` - Application state containing the database connection and section registry
/// - `slug` - URL slug of the page
///
/// # Returns
/// - `200 OK` - Composed page, possibly with no sections
/// - `404 Not Found` - No active page with that slug
/// - `500 Internal Server Error` - Database error while resolving the page
#[utoipa::path(
    get,
    path = "/api/pages/{slug}",
    tag = PAGE_TAG,
    params(
        ("slug" = String, Path, description = "Page slug")
    ),
    responses(
        (status = 200, description = "Composed page", body = PageRenderDto),
        (status = 404, description = "Page not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = PageCompositionService::new(&state.db, &state.registry);

    let page = service.compose(&slug, RenderScope::default()).await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Get a composed page scoped to an FAQ category.
///
/// Same as [`get_page`], but FAQ sections on the page only keep the given category.
/// An unknown category is a 404 and no section is loaded.
///
/// # Arguments
/// - `state` - Application state containing the database connection and section registry
/// - `slug` - URL slug of the page
/// - `category` - FAQ category slug
///
/// # Returns
/// - `200 OK` - Composed page with FAQ sections narrowed to the category
/// - `404 Not Found` - Page or category not found
/// - `500 Internal Server Error` - Database error while resolving the page
#[utoipa::path(
    get,
    path = "/api/pages/{slug}/{category}",
    tag = PAGE_TAG,
    params(
        ("slug" = String, Path, description = "Page slug"),
        ("category" = String, Path, description = "FAQ category slug")
    ),
    responses(
        (status = 200, description = "Composed page scoped to the category", body = PageRenderDto),
        (status = 404, description = "Page or category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_page_in_category(
    State(state): State<AppState>,
    Path((slug, category)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let service = PageCompositionService::new(&state.db, &state.registry);

    let page = service
        .compose(&slug, RenderScope::category(category))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Get site navigation.
///
/// Returns active pages flagged for the header and footer, each list in display order.
///
/// # Returns
/// - `200 OK` - Header and footer links
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/navigation",
    tag = PAGE_TAG,
    responses(
        (status = 200, description = "Header and footer navigation", body = NavigationDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_navigation(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = NavigationService::new(&state.db);

    let navigation = service.get_navigation().await?;

    Ok((StatusCode::OK, Json(navigation.into_dto())))
}
