//! Per-type section adapters.
//!
//! An adapter turns a payload id into a [`HydratedSection`] for one section type. Adapters
//! only read; a missing payload row is reported as [`SectionFault::MissingPayload`] and
//! any repository error inside an adapter becomes [`SectionFault::AdapterFault`].

pub mod faq;
pub mod feature_grid;
pub mod form;
pub mod html;
pub mod media;
pub mod pricing;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::server::{error::composition::SectionFault, model::section::HydratedSection};

pub use faq::FaqAdapter;
pub use feature_grid::FeatureGridAdapter;
pub use form::ContactFormAdapter;
pub use html::HtmlAdapter;
pub use media::MediaAdapter;
pub use pricing::PricingAdapter;

/// Request-level options that narrow what adapters load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderScope {
    /// FAQ category slug; when set FAQ sections keep only this category.
    pub category: Option<String>,
}

impl RenderScope {
    pub fn category(slug: impl Into<String>) -> Self {
        Self {
            category: Some(slug.into()),
        }
    }
}

/// Borrowed resources handed to every adapter of a single composition.
pub struct SectionContext<'a> {
    pub db: &'a DatabaseConnection,
    pub scope: &'a RenderScope,
}

/// Loads and shapes the payload of one section type.
#[async_trait]
pub trait SectionAdapter: Send + Sync {
    /// Hydrates the payload row with the given id.
    ///
    /// # Arguments
    /// - `ctx` - Database connection and render scope for the current request
    /// - `payload_id` - Row id in this adapter's payload table
    ///
    /// # Returns
    /// - `Ok(HydratedSection)` - Payload with all nested collections loaded and ordered
    /// - `Err(SectionFault::MissingPayload)` - No payload row with that id
    /// - `Err(SectionFault::AdapterFault)` - Repository error or malformed stored data
    async fn load(
        &self,
        ctx: &SectionContext<'_>,
        payload_id: i32,
    ) -> Result<HydratedSection, SectionFault>;
}
