use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::section::SectionPayloadDto;

/// A fully composed page, ready for the rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PageRenderDto {
    pub slug: String,
    pub title: String,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    /// Rendered sections in display order.
    pub sections: Vec<SectionDto>,
    /// Sections that were dropped during composition, in display order.
    pub omitted: Vec<OmittedSectionDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SectionDto {
    pub id: i32,
    pub section_type: String,
    pub position: u32,
    pub payload: SectionPayloadDto,
    pub layout: LayoutDto,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LayoutDto {
    pub alignment: Option<String>,
    pub media_position: Option<String>,
    pub background_style: Option<String>,
    pub spacing: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OmittedSectionDto {
    pub id: i32,
    pub section_type: String,
    pub position: u32,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NavigationDto {
    pub header: Vec<NavLinkDto>,
    pub footer: Vec<NavLinkDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NavLinkDto {
    pub slug: String,
    pub title: String,
}
