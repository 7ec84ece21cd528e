//! Database repository layer for pages and section payloads.
//!
//! This module contains repository structs that handle database reads for each section
//! type, plus the few content writes the admin surface needs. Repositories use SeaORM
//! entity models internally and return domain models to keep the data layer separate
//! from the composition logic.

pub mod faq;
pub mod feature_grid;
pub mod form;
pub mod html;
pub mod media;
pub mod page;
pub mod pricing;
pub mod section;

#[cfg(test)]
mod test;
