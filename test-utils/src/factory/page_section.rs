//! Section reference factory for attaching typed sections to pages.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating section references with customizable ordering and visibility.
pub struct PageSectionFactory<'a> {
    db: &'a DatabaseConnection,
    page_id: i32,
    section_type: String,
    payload_id: i32,
    sort_order: i32,
    is_visible: bool,
}

impl<'a> PageSectionFactory<'a> {
    /// Creates a new PageSectionFactory.
    ///
    /// Defaults:
    /// - sort_order: 0
    /// - visible
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `page_id` - Page the section belongs to
    /// - `section_type` - Registry tag such as `"media"` or `"pricing"`
    /// - `payload_id` - Row id in the payload table for the section type
    pub fn new(
        db: &'a DatabaseConnection,
        page_id: i32,
        section_type: impl Into<String>,
        payload_id: i32,
    ) -> Self {
        Self {
            db,
            page_id,
            section_type: section_type.into(),
            payload_id,
            sort_order: 0,
            is_visible: true,
        }
    }

    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn visible(mut self, is_visible: bool) -> Self {
        self.is_visible = is_visible;
        self
    }

    /// Builds and inserts the section reference into the database.
    pub async fn build(self) -> Result<entity::page_section::Model, DbErr> {
        entity::page_section::ActiveModel {
            page_id: ActiveValue::Set(self.page_id),
            section_type: ActiveValue::Set(self.section_type),
            payload_id: ActiveValue::Set(self.payload_id),
            sort_order: ActiveValue::Set(self.sort_order),
            is_visible: ActiveValue::Set(self.is_visible),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a visible section reference with sort order 0.
pub async fn create_section(
    db: &DatabaseConnection,
    page_id: i32,
    section_type: impl Into<String>,
    payload_id: i32,
) -> Result<entity::page_section::Model, DbErr> {
    PageSectionFactory::new(db, page_id, section_type, payload_id)
        .build()
        .await
}
