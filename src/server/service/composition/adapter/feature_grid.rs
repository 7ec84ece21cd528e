use async_trait::async_trait;

use crate::server::{
    data::feature_grid::FeatureGridRepository,
    error::composition::SectionFault,
    model::section::{HydratedSection, SectionPayload, SectionType},
    service::composition::adapter::{SectionAdapter, SectionContext},
};

pub struct FeatureGridAdapter;

#[async_trait]
impl SectionAdapter for FeatureGridAdapter {
    async fn load(
        &self,
        ctx: &SectionContext<'_>,
        payload_id: i32,
    ) -> Result<HydratedSection, SectionFault> {
        let (section, layout) = FeatureGridRepository::new(ctx.db)
            .get_by_id(payload_id)
            .await?
            .ok_or(SectionFault::MissingPayload {
                section_type: SectionType::FeatureGrid,
                payload_id,
            })?;

        Ok(HydratedSection {
            payload: SectionPayload::FeatureGrid(section),
            layout,
        })
    }
}
