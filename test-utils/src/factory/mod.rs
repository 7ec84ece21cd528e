//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating content rows with sensible defaults,
//! reducing boilerplate in tests. Each factory takes the foreign keys it needs explicitly,
//! so tests decide which parent rows exist.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let page = factory::create_page(&db).await?;
//!     let media = factory::create_media_section(&db).await?;
//!     factory::create_section(&db, page.id, "media", media.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let page = factory::page::PageFactory::new(&db)
//!     .slug("pricing")
//!     .show_in_header(true)
//!     .build()
//!     .await?;
//!
//! let section = factory::page_section::PageSectionFactory::new(&db, page.id, "pricing", 7)
//!     .sort_order(2)
//!     .visible(false)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `page` - Pages
//! - `page_section` - Section references on a page
//! - `media` - Media sections and their feature bullets
//! - `feature_grid` - Feature grid sections and items
//! - `pricing` - Pricing sections, plans, billing cycles, prices, features and limits
//! - `faq` - FAQ sections, categories and questions
//! - `form` - Contact form sections and fields
//! - `html` - Raw HTML/script sections
//! - `helpers` - ID generation

pub mod faq;
pub mod feature_grid;
pub mod form;
pub mod helpers;
pub mod html;
pub mod media;
pub mod page;
pub mod page_section;
pub mod pricing;

// Re-export commonly used factory functions for concise usage
pub use faq::{create_faq, create_faq_category, create_faq_section};
pub use feature_grid::{create_feature_grid_item, create_feature_grid_section};
pub use form::{create_form_field, create_form_section};
pub use html::create_html_section;
pub use media::{create_media_feature, create_media_section};
pub use page::create_page;
pub use page_section::create_section;
pub use pricing::{
    create_billing_cycle, create_custom_feature, create_feature_limit, create_plan,
    create_plan_pricing, create_pricing_section, create_shared_feature, link_shared_feature,
};
