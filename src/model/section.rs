use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{faq::FaqSectionDto, form::ContactFormDto, pricing::PricingSectionDto};

/// Type-specific section content, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionPayloadDto {
    Media(MediaSectionDto),
    FeatureGrid(FeatureGridDto),
    Pricing(PricingSectionDto),
    Faq(FaqSectionDto),
    ContactForm(ContactFormDto),
    Html(HtmlSectionDto),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MediaSectionDto {
    pub layout_type: String,
    pub media_type: String,
    pub media_url: Option<String>,
    pub poster_url: Option<String>,
    pub badge_text: Option<String>,
    pub heading: String,
    pub subheading: Option<String>,
    pub text_color: Option<String>,
    pub background_color: Option<String>,
    pub features: Vec<MediaFeatureDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MediaFeatureDto {
    pub icon: Option<String>,
    pub label: String,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FeatureGridDto {
    pub heading: String,
    pub subheading: Option<String>,
    pub columns: i32,
    pub items: Vec<FeatureGridItemDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FeatureGridItemDto {
    pub icon: Option<String>,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HtmlSectionDto {
    pub name: String,
    pub html: Option<String>,
    pub css: Option<String>,
    pub script: Option<String>,
    pub script_placement: String,
}
