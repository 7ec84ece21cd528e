//! Service layer for composition and content operations.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Composition**: Resolving a page and assembling its sections into a render model
//! - **Orchestration**: Coordinating repository calls for navigation and admin updates
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod composition;
pub mod navigation;
pub mod pricing;

#[cfg(test)]
mod test;
