//! Media section factory for creating hero/video blocks and their feature bullets.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating media sections with customizable layout columns.
pub struct MediaSectionFactory<'a> {
    db: &'a DatabaseConnection,
    heading: String,
    layout_type: String,
    media_type: String,
    media_url: Option<String>,
    alignment: Option<String>,
    media_position: Option<String>,
    background_style: Option<String>,
    spacing: Option<String>,
}

impl<'a> MediaSectionFactory<'a> {
    /// Creates a new MediaSectionFactory with default values.
    ///
    /// Defaults:
    /// - heading: `"Media {id}"`
    /// - layout_type: `"split"`, media_type: `"video"`
    /// - no layout parameters
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            heading: format!("Media {}", id),
            layout_type: "split".to_string(),
            media_type: "video".to_string(),
            media_url: Some(format!("https://cdn.example.com/media-{}.mp4", id)),
            alignment: None,
            media_position: None,
            background_style: None,
            spacing: None,
        }
    }

    pub fn heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = heading.into();
        self
    }

    pub fn media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = media_type.into();
        self
    }

    /// Sets alignment, media position and background style in one call.
    pub fn layout(
        mut self,
        alignment: impl Into<String>,
        media_position: impl Into<String>,
        background_style: impl Into<String>,
    ) -> Self {
        self.alignment = Some(alignment.into());
        self.media_position = Some(media_position.into());
        self.background_style = Some(background_style.into());
        self
    }

    pub fn spacing(mut self, spacing: impl Into<String>) -> Self {
        self.spacing = Some(spacing.into());
        self
    }

    pub async fn build(self) -> Result<entity::media_section::Model, DbErr> {
        entity::media_section::ActiveModel {
            layout_type: ActiveValue::Set(self.layout_type),
            media_type: ActiveValue::Set(self.media_type),
            media_url: ActiveValue::Set(self.media_url),
            poster_url: ActiveValue::Set(None),
            badge_text: ActiveValue::Set(None),
            heading: ActiveValue::Set(self.heading),
            subheading: ActiveValue::Set(None),
            text_color: ActiveValue::Set(None),
            background_color: ActiveValue::Set(None),
            background_style: ActiveValue::Set(self.background_style),
            alignment: ActiveValue::Set(self.alignment),
            media_position: ActiveValue::Set(self.media_position),
            spacing: ActiveValue::Set(self.spacing),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a media section with default values.
pub async fn create_media_section(
    db: &DatabaseConnection,
) -> Result<entity::media_section::Model, DbErr> {
    MediaSectionFactory::new(db).build().await
}

/// Creates a feature bullet on a media section.
pub async fn create_media_feature(
    db: &DatabaseConnection,
    media_section_id: i32,
    label: impl Into<String>,
    sort_order: i32,
) -> Result<entity::media_feature::Model, DbErr> {
    entity::media_feature::ActiveModel {
        media_section_id: ActiveValue::Set(media_section_id),
        icon: ActiveValue::Set(Some("check".to_string())),
        label: ActiveValue::Set(label.into()),
        color: ActiveValue::Set(None),
        sort_order: ActiveValue::Set(sort_order),
        ..Default::default()
    }
    .insert(db)
    .await
}
