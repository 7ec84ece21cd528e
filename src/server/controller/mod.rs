//! HTTP request handlers.
//!
//! Controllers extract request data, call the service layer and convert domain models
//! to DTOs. Every handler is annotated with `#[utoipa::path]` for the OpenAPI document.

pub mod admin;
pub mod page;
