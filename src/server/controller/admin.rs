use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    model::api::ErrorDto,
    server::{error::AppError, service::pricing::PricingService, state::AppState},
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Mark a plan as popular.
///
/// Clears the popular flag on every other plan of the same pricing section and sets it
/// on this plan, so each section has at most one popular plan.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `plan_id` - ID of the plan to mark popular
///
/// # Returns
/// - `204 No Content` - Plan marked popular
/// - `404 Not Found` - Plan not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/admin/plans/{plan_id}/popular",
    tag = ADMIN_TAG,
    params(
        ("plan_id" = i32, Path, description = "Plan ID")
    ),
    responses(
        (status = 204, description = "Plan marked popular"),
        (status = 404, description = "Plan not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_popular_plan(
    State(state): State<AppState>,
    Path(plan_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = PricingService::new(&state.db);

    service.set_popular_plan(plan_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Make a billing cycle the default.
///
/// Clears the default flag on every billing cycle and sets it on this one.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - ID of the billing cycle
///
/// # Returns
/// - `204 No Content` - Billing cycle is now the default
/// - `404 Not Found` - Billing cycle not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/admin/billing-cycles/{id}/default",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Billing cycle ID")
    ),
    responses(
        (status = 204, description = "Billing cycle set as default"),
        (status = 404, description = "Billing cycle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_default_billing_cycle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = PricingService::new(&state.db);

    service.set_default_billing_cycle(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
