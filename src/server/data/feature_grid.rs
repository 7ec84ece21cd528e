use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::{feature_grid::FeatureGridSection, section::LayoutParams};

pub struct FeatureGridRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeatureGridRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a feature grid with its items ordered by sort order, ties by id.
    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<(FeatureGridSection, LayoutParams)>, DbErr> {
        let Some(section) = entity::prelude::FeatureGridSection::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let items = entity::prelude::FeatureGridItem::find()
            .filter(entity::feature_grid_item::Column::FeatureGridSectionId.eq(id))
            .order_by_asc(entity::feature_grid_item::Column::SortOrder)
            .order_by_asc(entity::feature_grid_item::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(FeatureGridSection::from_entity(section, items)))
    }
}
