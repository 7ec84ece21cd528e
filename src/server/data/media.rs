use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::{media::MediaSection, section::LayoutParams};

pub struct MediaSectionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MediaSectionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a media section with its feature bullets ordered by sort order.
    ///
    /// # Returns
    /// - `Ok(Some((MediaSection, LayoutParams)))` - Section found
    /// - `Ok(None)` - No media section with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<(MediaSection, LayoutParams)>, DbErr> {
        let Some(section) = entity::prelude::MediaSection::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let features = entity::prelude::MediaFeature::find()
            .filter(entity::media_feature::Column::MediaSectionId.eq(id))
            .order_by_asc(entity::media_feature::Column::SortOrder)
            .order_by_asc(entity::media_feature::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(MediaSection::from_entity(section, features)))
    }
}
