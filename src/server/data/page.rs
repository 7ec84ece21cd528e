use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::page::{NavLink, Navigation, Page};

pub struct PageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds an active page by its unique slug.
    ///
    /// Performs a single lookup on the unique slug index. Inactive pages are treated the
    /// same as missing ones.
    ///
    /// # Arguments
    /// - `slug` - URL slug of the page
    ///
    /// # Returns
    /// - `Ok(Some(Page))` - Active page with the given slug
    /// - `Ok(None)` - No page with that slug, or the page is inactive
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_active_by_slug(&self, slug: &str) -> Result<Option<Page>, DbErr> {
        let page = entity::prelude::Page::find()
            .filter(entity::page::Column::Slug.eq(slug))
            .filter(entity::page::Column::IsActive.eq(true))
            .one(self.db)
            .await?;

        Ok(page.map(Page::from_entity))
    }

    /// Gets header and footer navigation links.
    ///
    /// Loads every active page flagged for the header or the footer in one query, ordered
    /// by sort order then id, and splits them into the two lists. A page flagged for both
    /// appears in both.
    ///
    /// # Returns
    /// - `Ok(Navigation)` - Header and footer links in display order
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_navigation(&self) -> Result<Navigation, DbErr> {
        let pages = entity::prelude::Page::find()
            .filter(entity::page::Column::IsActive.eq(true))
            .filter(
                Condition::any()
                    .add(entity::page::Column::ShowInHeader.eq(true))
                    .add(entity::page::Column::ShowInFooter.eq(true)),
            )
            .order_by_asc(entity::page::Column::SortOrder)
            .order_by_asc(entity::page::Column::Id)
            .all(self.db)
            .await?;

        let mut navigation = Navigation::default();
        for page in &pages {
            if page.show_in_header {
                navigation.header.push(NavLink::from_entity(page));
            }
            if page.show_in_footer {
                navigation.footer.push(NavLink::from_entity(page));
            }
        }

        Ok(navigation)
    }
}
