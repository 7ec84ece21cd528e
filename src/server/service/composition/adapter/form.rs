use async_trait::async_trait;

use crate::server::{
    data::form::FormSectionRepository,
    error::composition::SectionFault,
    model::section::{HydratedSection, SectionPayload, SectionType},
    service::composition::adapter::{SectionAdapter, SectionContext},
};

/// Hydrates contact forms. Malformed option JSON on any field faults the section.
pub struct ContactFormAdapter;

#[async_trait]
impl SectionAdapter for ContactFormAdapter {
    async fn load(
        &self,
        ctx: &SectionContext<'_>,
        payload_id: i32,
    ) -> Result<HydratedSection, SectionFault> {
        let (section, layout) = FormSectionRepository::new(ctx.db)
            .get_by_id(payload_id)
            .await?
            .ok_or(SectionFault::MissingPayload {
                section_type: SectionType::ContactForm,
                payload_id,
            })?;

        Ok(HydratedSection {
            payload: SectionPayload::ContactForm(section),
            layout,
        })
    }
}
