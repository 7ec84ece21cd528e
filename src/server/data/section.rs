use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::section::SectionRef;

pub struct SectionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SectionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the visible sections of a page in display order.
    ///
    /// Hidden sections are filtered out in the query. Rows are ordered by sort order
    /// ascending with ties broken by id, so the order is total even when sort orders
    /// collide. Each reference records its zero-based position in the result.
    ///
    /// # Arguments
    /// - `page_id` - ID of the page whose sections to load
    ///
    /// # Returns
    /// - `Ok(Vec<SectionRef>)` - Visible sections in display order, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_visible_by_page_id(&self, page_id: i32) -> Result<Vec<SectionRef>, DbErr> {
        let sections = entity::prelude::PageSection::find()
            .filter(entity::page_section::Column::PageId.eq(page_id))
            .filter(entity::page_section::Column::IsVisible.eq(true))
            .order_by_asc(entity::page_section::Column::SortOrder)
            .order_by_asc(entity::page_section::Column::Id)
            .all(self.db)
            .await?;

        Ok(sections
            .into_iter()
            .enumerate()
            .map(|(position, section)| SectionRef::from_entity(section, position))
            .collect())
    }
}
