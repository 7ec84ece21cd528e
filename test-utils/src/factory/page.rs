//! Page factory for creating test page entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test pages with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::page::PageFactory;
///
/// let page = PageFactory::new(&db)
///     .slug("home")
///     .title("Home")
///     .build()
///     .await?;
/// ```
pub struct PageFactory<'a> {
    db: &'a DatabaseConnection,
    slug: String,
    title: String,
    meta_title: Option<String>,
    meta_description: Option<String>,
    show_in_header: bool,
    show_in_footer: bool,
    sort_order: i32,
    is_active: bool,
}

impl<'a> PageFactory<'a> {
    /// Creates a new PageFactory with default values.
    ///
    /// Defaults:
    /// - slug: `"page-{id}"` where id is auto-incremented
    /// - title: `"Page {id}"`
    /// - active, hidden from header and footer navigation, sort order 0
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            slug: format!("page-{}", id),
            title: format!("Page {}", id),
            meta_title: None,
            meta_description: None,
            show_in_header: false,
            show_in_footer: false,
            sort_order: 0,
            is_active: true,
        }
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn meta(mut self, title: impl Into<String>, description: impl Into<String>) -> Self {
        self.meta_title = Some(title.into());
        self.meta_description = Some(description.into());
        self
    }

    pub fn show_in_header(mut self, show: bool) -> Self {
        self.show_in_header = show;
        self
    }

    pub fn show_in_footer(mut self, show: bool) -> Self {
        self.show_in_footer = show;
        self
    }

    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the page entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::page::Model)` - Created page entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::page::Model, DbErr> {
        let now = chrono::Utc::now();
        entity::page::ActiveModel {
            slug: ActiveValue::Set(self.slug),
            title: ActiveValue::Set(self.title),
            meta_title: ActiveValue::Set(self.meta_title),
            meta_description: ActiveValue::Set(self.meta_description),
            show_in_header: ActiveValue::Set(self.show_in_header),
            show_in_footer: ActiveValue::Set(self.show_in_footer),
            sort_order: ActiveValue::Set(self.sort_order),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active page with default values.
///
/// Shorthand for `PageFactory::new(db).build().await`.
pub async fn create_page(db: &DatabaseConnection) -> Result<entity::page::Model, DbErr> {
    PageFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_page_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Page).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let page = create_page(db).await?;

        assert!(page.slug.starts_with("page-"));
        assert!(page.is_active);
        assert!(!page.show_in_header);

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_pages() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Page).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_page(db).await?;
        let second = create_page(db).await?;

        assert_ne!(first.id, second.id);
        assert_ne!(first.slug, second.slug);

        Ok(())
    }
}
