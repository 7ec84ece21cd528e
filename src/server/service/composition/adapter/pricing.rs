use async_trait::async_trait;

use crate::server::{
    data::pricing::PricingSectionRepository,
    error::composition::SectionFault,
    model::section::{HydratedSection, SectionPayload, SectionType},
    service::composition::adapter::{SectionAdapter, SectionContext},
};

/// Hydrates pricing sections: active plans with per-cycle prices, the shared/custom
/// feature union and resolved limits.
pub struct PricingAdapter;

#[async_trait]
impl SectionAdapter for PricingAdapter {
    async fn load(
        &self,
        ctx: &SectionContext<'_>,
        payload_id: i32,
    ) -> Result<HydratedSection, SectionFault> {
        let (section, layout) = PricingSectionRepository::new(ctx.db)
            .get_by_id(payload_id)
            .await?
            .ok_or(SectionFault::MissingPayload {
                section_type: SectionType::Pricing,
                payload_id,
            })?;

        Ok(HydratedSection {
            payload: SectionPayload::Pricing(section),
            layout,
        })
    }
}
