//! Composed page render model.
//!
//! The render model is the output of a composition: the page metadata, the sections
//! that hydrated successfully in loader order, and the sections that were dropped with
//! their fault.

use crate::{
    model::page::{OmittedSectionDto, PageRenderDto, SectionDto},
    server::{
        error::composition::SectionFault,
        model::{
            page::Page,
            section::{HydratedSection, LayoutParams, SectionPayload, SectionRef},
        },
    },
};

/// Result of isolating a single section.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionOutcome {
    Rendered {
        section: SectionRef,
        hydrated: HydratedSection,
    },
    Omitted {
        section: SectionRef,
        reason: SectionFault,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSection {
    pub section_id: i32,
    pub section_tag: String,
    pub position: usize,
    pub payload: SectionPayload,
    pub layout: LayoutParams,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OmittedSection {
    pub section_id: i32,
    pub section_tag: String,
    pub position: usize,
    pub reason: SectionFault,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageRenderModel {
    pub page: Page,
    pub sections: Vec<RenderedSection>,
    pub omitted: Vec<OmittedSection>,
}

impl PageRenderModel {
    /// Converts the render model to a DTO for API responses.
    ///
    /// Section and omission order is preserved. Omission reasons are rendered with their
    /// display message.
    ///
    /// # Returns
    /// - `PageRenderDto` - Serializable page with sections and omissions
    pub fn into_dto(self) -> PageRenderDto {
        PageRenderDto {
            slug: self.page.slug,
            title: self.page.title,
            meta_title: self.page.meta_title,
            meta_description: self.page.meta_description,
            sections: self
                .sections
                .into_iter()
                .map(|section| SectionDto {
                    id: section.section_id,
                    section_type: section.section_tag,
                    position: section.position as u32,
                    payload: section.payload.into_dto(),
                    layout: section.layout.into_dto(),
                })
                .collect(),
            omitted: self
                .omitted
                .into_iter()
                .map(|section| OmittedSectionDto {
                    id: section.section_id,
                    section_type: section.section_tag,
                    position: section.position as u32,
                    reason: section.reason.to_string(),
                })
                .collect(),
        }
    }
}
