//! SeaORM entity models for the content database.
//!
//! Each module maps one table. Pages own their section references; every section
//! reference points at a row in one of the type-specific payload tables.

pub mod prelude;

pub mod billing_cycle;
pub mod faq;
pub mod faq_category;
pub mod faq_section;
pub mod feature_grid_item;
pub mod feature_grid_section;
pub mod feature_limit;
pub mod form_field;
pub mod form_section;
pub mod html_section;
pub mod media_feature;
pub mod media_section;
pub mod page;
pub mod page_section;
pub mod plan;
pub mod plan_feature;
pub mod plan_pricing;
pub mod pricing_section;
pub mod shared_feature;
