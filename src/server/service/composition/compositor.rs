use crate::server::model::{
    page::Page,
    render::{OmittedSection, PageRenderModel, RenderedSection, SectionOutcome},
};

/// Folds section outcomes into a render model.
///
/// Pure: no I/O, no reordering, no filtering beyond splitting rendered from omitted.
pub struct Compositor;

impl Compositor {
    /// Composes the render model for a page.
    ///
    /// # Arguments
    /// - `page` - The resolved page
    /// - `outcomes` - Section outcomes in loader order
    ///
    /// # Returns
    /// - `PageRenderModel` - Rendered sections and omissions, each in loader order
    pub fn compose(page: Page, outcomes: Vec<SectionOutcome>) -> PageRenderModel {
        let mut sections = Vec::with_capacity(outcomes.len());
        let mut omitted = Vec::new();

        for outcome in outcomes {
            match outcome {
                SectionOutcome::Rendered { section, hydrated } => {
                    sections.push(RenderedSection {
                        section_id: section.id,
                        section_tag: section.section_tag,
                        position: section.position,
                        payload: hydrated.payload,
                        layout: hydrated.layout,
                    })
                }
                SectionOutcome::Omitted { section, reason } => omitted.push(OmittedSection {
                    section_id: section.id,
                    section_tag: section.section_tag,
                    position: section.position,
                    reason,
                }),
            }
        }

        PageRenderModel {
            page,
            sections,
            omitted,
        }
    }
}
