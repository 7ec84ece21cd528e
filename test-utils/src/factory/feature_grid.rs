//! Feature grid factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a three-column feature grid section with no layout parameters.
pub async fn create_feature_grid_section(
    db: &DatabaseConnection,
) -> Result<entity::feature_grid_section::Model, DbErr> {
    entity::feature_grid_section::ActiveModel {
        heading: ActiveValue::Set(format!("Features {}", next_id())),
        subheading: ActiveValue::Set(None),
        columns: ActiveValue::Set(3),
        background_style: ActiveValue::Set(None),
        alignment: ActiveValue::Set(None),
        spacing: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates an item in a feature grid.
pub async fn create_feature_grid_item(
    db: &DatabaseConnection,
    feature_grid_section_id: i32,
    title: impl Into<String>,
    sort_order: i32,
) -> Result<entity::feature_grid_item::Model, DbErr> {
    entity::feature_grid_item::ActiveModel {
        feature_grid_section_id: ActiveValue::Set(feature_grid_section_id),
        icon: ActiveValue::Set(None),
        title: ActiveValue::Set(title.into()),
        description: ActiveValue::Set(None),
        sort_order: ActiveValue::Set(sort_order),
        ..Default::default()
    }
    .insert(db)
    .await
}
