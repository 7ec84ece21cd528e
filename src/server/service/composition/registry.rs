//! Section type registry.
//!
//! Maps each [`SectionType`] to the adapter that hydrates it. The registry is built once
//! at startup, wrapped in an `Arc` and shared immutably across requests. Adding a new
//! section type means adding a variant, an adapter and one `register` call; the
//! compositor never names a type.

use std::{collections::HashMap, sync::Arc};

use crate::server::{
    error::composition::SectionFault,
    model::section::SectionType,
    service::composition::adapter::{
        ContactFormAdapter, FaqAdapter, FeatureGridAdapter, HtmlAdapter, MediaAdapter,
        PricingAdapter, SectionAdapter,
    },
};

pub struct SectionRegistry {
    adapters: HashMap<SectionType, Arc<dyn SectionAdapter>>,
}

impl SectionRegistry {
    pub fn builder() -> SectionRegistryBuilder {
        SectionRegistryBuilder {
            adapters: HashMap::new(),
        }
    }

    /// Creates a registry with an adapter for every built-in section type.
    pub fn standard() -> Self {
        Self::builder()
            .register(SectionType::Media, MediaAdapter)
            .register(SectionType::FeatureGrid, FeatureGridAdapter)
            .register(SectionType::Pricing, PricingAdapter)
            .register(SectionType::Faq, FaqAdapter)
            .register(SectionType::ContactForm, ContactFormAdapter)
            .register(SectionType::Html, HtmlAdapter)
            .build()
    }

    /// Finds the adapter for a stored section tag.
    ///
    /// # Arguments
    /// - `tag` - Type tag exactly as stored on the section reference
    ///
    /// # Returns
    /// - `Ok(&dyn SectionAdapter)` - Adapter registered for the parsed type
    /// - `Err(SectionFault::UnknownSectionType)` - Tag does not parse, or the parsed type
    ///   has no adapter registered
    pub fn lookup(&self, tag: &str) -> Result<&dyn SectionAdapter, SectionFault> {
        let section_type: SectionType = tag
            .parse()
            .map_err(|_| SectionFault::UnknownSectionType(tag.to_string()))?;

        self.adapters
            .get(&section_type)
            .map(|adapter| adapter.as_ref())
            .ok_or_else(|| SectionFault::UnknownSectionType(tag.to_string()))
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }
}

pub struct SectionRegistryBuilder {
    adapters: HashMap<SectionType, Arc<dyn SectionAdapter>>,
}

impl SectionRegistryBuilder {
    /// Registers an adapter, replacing any adapter previously registered for the type.
    pub fn register(
        mut self,
        section_type: SectionType,
        adapter: impl SectionAdapter + 'static,
    ) -> Self {
        self.adapters.insert(section_type, Arc::new(adapter));
        self
    }

    pub fn build(self) -> SectionRegistry {
        SectionRegistry {
            adapters: self.adapters,
        }
    }
}
