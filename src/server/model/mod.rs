//! Server-side domain models.
//!
//! This module contains domain models used throughout the service layer, representing
//! pages, section references and the hydrated payload of every section type. Domain
//! models are converted from entity models at the repository boundary and transformed
//! to DTOs at the controller boundary.

pub mod faq;
pub mod feature_grid;
pub mod form;
pub mod html;
pub mod media;
pub mod page;
pub mod pricing;
pub mod render;
pub mod section;
