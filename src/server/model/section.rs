//! Section references, type tags and hydrated section payloads.
//!
//! A page is composed of an ordered list of [`SectionRef`]s. Each reference carries a
//! stored type tag that is parsed into a [`SectionType`] by the registry, and the id of
//! the row holding the type-specific payload. Adapters turn a reference into a
//! [`HydratedSection`].

use std::{fmt, str::FromStr};

use crate::{
    model::{page::LayoutDto, section::SectionPayloadDto},
    server::model::{
        faq::FaqSection, feature_grid::FeatureGridSection, form::ContactFormSection,
        html::HtmlSection, media::MediaSection, pricing::PricingSection,
    },
};

/// Closed set of section kinds the engine knows how to hydrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionType {
    Media,
    FeatureGrid,
    Pricing,
    Faq,
    ContactForm,
    Html,
}

impl SectionType {
    /// All section types in a stable order.
    pub const ALL: [SectionType; 6] = [
        SectionType::Media,
        SectionType::FeatureGrid,
        SectionType::Pricing,
        SectionType::Faq,
        SectionType::ContactForm,
        SectionType::Html,
    ];

    /// Canonical tag used in API responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Media => "media",
            SectionType::FeatureGrid => "feature_grid",
            SectionType::Pricing => "pricing",
            SectionType::Faq => "faq",
            SectionType::ContactForm => "contact_form",
            SectionType::Html => "html",
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a stored tag names no known section type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTag(pub String);

impl FromStr for SectionType {
    type Err = UnknownTag;

    /// Parses a stored section tag.
    ///
    /// `video` is accepted as an alias of `media` since video heroes are stored as
    /// media sections with a video `media_type`.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "media" | "video" => Ok(SectionType::Media),
            "feature_grid" => Ok(SectionType::FeatureGrid),
            "pricing" => Ok(SectionType::Pricing),
            "faq" => Ok(SectionType::Faq),
            "contact_form" => Ok(SectionType::ContactForm),
            "html" => Ok(SectionType::Html),
            other => Err(UnknownTag(other.to_string())),
        }
    }
}

/// A visible section placement on a page, as produced by the section loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRef {
    pub id: i32,
    pub page_id: i32,
    /// Type tag exactly as stored. Parsed lazily so unknown tags only affect their section.
    pub section_tag: String,
    pub payload_id: i32,
    pub sort_order: i32,
    /// Zero-based index in the loader's ordered output.
    pub position: usize,
}

impl SectionRef {
    /// Converts a page section entity into a reference at a given position.
    ///
    /// # Arguments
    /// - `entity` - The page section row
    /// - `position` - Zero-based index of the row in the ordered, filtered section list
    ///
    /// # Returns
    /// - `SectionRef` - Reference carrying the raw tag and payload id
    pub fn from_entity(entity: entity::page_section::Model, position: usize) -> Self {
        Self {
            id: entity.id,
            page_id: entity.page_id,
            section_tag: entity.section_type,
            payload_id: entity.payload_id,
            sort_order: entity.sort_order,
            position,
        }
    }
}

/// Presentation hints attached to a section. Passed through uninterpreted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutParams {
    pub alignment: Option<String>,
    pub media_position: Option<String>,
    pub background_style: Option<String>,
    pub spacing: Option<String>,
}

impl LayoutParams {
    pub fn into_dto(self) -> LayoutDto {
        LayoutDto {
            alignment: self.alignment,
            media_position: self.media_position,
            background_style: self.background_style,
            spacing: self.spacing,
        }
    }
}

/// Type-specific section content.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionPayload {
    Media(MediaSection),
    FeatureGrid(FeatureGridSection),
    Pricing(PricingSection),
    Faq(FaqSection),
    ContactForm(ContactFormSection),
    Html(HtmlSection),
}

impl SectionPayload {
    pub fn into_dto(self) -> SectionPayloadDto {
        match self {
            SectionPayload::Media(section) => SectionPayloadDto::Media(section.into_dto()),
            SectionPayload::FeatureGrid(section) => {
                SectionPayloadDto::FeatureGrid(section.into_dto())
            }
            SectionPayload::Pricing(section) => SectionPayloadDto::Pricing(section.into_dto()),
            SectionPayload::Faq(section) => SectionPayloadDto::Faq(section.into_dto()),
            SectionPayload::ContactForm(section) => {
                SectionPayloadDto::ContactForm(section.into_dto())
            }
            SectionPayload::Html(section) => SectionPayloadDto::Html(section.into_dto()),
        }
    }
}

/// Output of a section adapter: the payload with all nested collections loaded, plus
/// its layout parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct HydratedSection {
    pub payload: SectionPayload,
    pub layout: LayoutParams,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_canonical_tag() {
        for section_type in SectionType::ALL {
            let parsed: SectionType = section_type.as_str().parse().unwrap();
            assert_eq!(parsed, section_type);
        }
    }

    #[test]
    fn video_is_an_alias_for_media() {
        assert_eq!("video".parse::<SectionType>(), Ok(SectionType::Media));
    }

    #[test]
    fn rejects_unknown_tag() {
        assert_eq!(
            "carousel".parse::<SectionType>(),
            Err(UnknownTag("carousel".to_string()))
        );
    }

    #[test]
    fn tags_are_case_sensitive() {
        assert!("Pricing".parse::<SectionType>().is_err());
    }
}
