use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "feature_grid_section")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub heading: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub subheading: Option<String>,
    pub columns: i32,
    pub background_style: Option<String>,
    pub alignment: Option<String>,
    pub spacing: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::feature_grid_item::Entity")]
    FeatureGridItem,
}

impl Related<super::feature_grid_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FeatureGridItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
