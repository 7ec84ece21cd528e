use async_trait::async_trait;

use crate::server::{
    data::media::MediaSectionRepository,
    error::composition::SectionFault,
    model::section::{HydratedSection, SectionPayload, SectionType},
    service::composition::adapter::{SectionAdapter, SectionContext},
};

/// Hydrates media heroes with their feature bullets.
pub struct MediaAdapter;

#[async_trait]
impl SectionAdapter for MediaAdapter {
    async fn load(
        &self,
        ctx: &SectionContext<'_>,
        payload_id: i32,
    ) -> Result<HydratedSection, SectionFault> {
        let (section, layout) = MediaSectionRepository::new(ctx.db)
            .get_by_id(payload_id)
            .await?
            .ok_or(SectionFault::MissingPayload {
                section_type: SectionType::Media,
                payload_id,
            })?;

        Ok(HydratedSection {
            payload: SectionPayload::Media(section),
            layout,
        })
    }
}
