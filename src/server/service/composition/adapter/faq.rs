use async_trait::async_trait;

use crate::server::{
    data::faq::FaqSectionRepository,
    error::composition::SectionFault,
    model::section::{HydratedSection, SectionPayload, SectionType},
    service::composition::adapter::{SectionAdapter, SectionContext},
};

/// Hydrates FAQ sections, honoring the request's category scope.
pub struct FaqAdapter;

#[async_trait]
impl SectionAdapter for FaqAdapter {
    async fn load(
        &self,
        ctx: &SectionContext<'_>,
        payload_id: i32,
    ) -> Result<HydratedSection, SectionFault> {
        let (section, layout) = FaqSectionRepository::new(ctx.db)
            .get_by_id(payload_id, ctx.scope.category.as_deref())
            .await?
            .ok_or(SectionFault::MissingPayload {
                section_type: SectionType::Faq,
                payload_id,
            })?;

        Ok(HydratedSection {
            payload: SectionPayload::Faq(section),
            layout,
        })
    }
}
