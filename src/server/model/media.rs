//! Media hero section models.

use crate::{
    model::section::{MediaFeatureDto, MediaSectionDto},
    server::model::section::LayoutParams,
};

/// Media hero: image or video with heading, badge and a short bullet list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaSection {
    pub id: i32,
    pub layout_type: String,
    pub media_type: String,
    pub media_url: Option<String>,
    pub poster_url: Option<String>,
    pub badge_text: Option<String>,
    pub heading: String,
    pub subheading: Option<String>,
    pub text_color: Option<String>,
    pub background_color: Option<String>,
    /// Bullets ordered by sort order, ties by id.
    pub features: Vec<MediaFeature>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFeature {
    pub icon: Option<String>,
    pub label: String,
    pub color: Option<String>,
}

impl MediaSection {
    /// Converts the section row and its ordered bullet rows into a domain model.
    ///
    /// # Arguments
    /// - `entity` - The media section entity
    /// - `features` - Bullet entities, already ordered
    ///
    /// # Returns
    /// - `(MediaSection, LayoutParams)` - The payload and its layout hints
    pub fn from_entity(
        entity: entity::media_section::Model,
        features: Vec<entity::media_feature::Model>,
    ) -> (Self, LayoutParams) {
        let layout = LayoutParams {
            alignment: entity.alignment,
            media_position: entity.media_position,
            background_style: entity.background_style,
            spacing: entity.spacing,
        };

        let section = Self {
            id: entity.id,
            layout_type: entity.layout_type,
            media_type: entity.media_type,
            media_url: entity.media_url,
            poster_url: entity.poster_url,
            badge_text: entity.badge_text,
            heading: entity.heading,
            subheading: entity.subheading,
            text_color: entity.text_color,
            background_color: entity.background_color,
            features: features
                .into_iter()
                .map(|f| MediaFeature {
                    icon: f.icon,
                    label: f.label,
                    color: f.color,
                })
                .collect(),
        };

        (section, layout)
    }

    pub fn into_dto(self) -> MediaSectionDto {
        MediaSectionDto {
            layout_type: self.layout_type,
            media_type: self.media_type,
            media_url: self.media_url,
            poster_url: self.poster_url,
            badge_text: self.badge_text,
            heading: self.heading,
            subheading: self.subheading,
            text_color: self.text_color,
            background_color: self.background_color,
            features: self
                .features
                .into_iter()
                .map(|f| MediaFeatureDto {
                    icon: f.icon,
                    label: f.label,
                    color: f.color,
                })
                .collect(),
        }
    }
}
