use async_trait::async_trait;

use crate::server::{
    data::html::HtmlSectionRepository,
    error::composition::SectionFault,
    model::section::{HydratedSection, SectionPayload, SectionType},
    service::composition::adapter::{SectionAdapter, SectionContext},
};

pub struct HtmlAdapter;

#[async_trait]
impl SectionAdapter for HtmlAdapter {
    async fn load(
        &self,
        ctx: &SectionContext<'_>,
        payload_id: i32,
    ) -> Result<HydratedSection, SectionFault> {
        let (section, layout) = HtmlSectionRepository::new(ctx.db)
            .get_by_id(payload_id)
            .await?
            .ok_or(SectionFault::MissingPayload {
                section_type: SectionType::Html,
                payload_id,
            })?;

        Ok(HydratedSection {
            payload: SectionPayload::Html(section),
            layout,
        })
    }
}
