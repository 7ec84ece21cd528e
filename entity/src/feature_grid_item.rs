use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "feature_grid_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub feature_grid_section_id: i32,
    pub icon: Option<String>,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub sort_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::feature_grid_section::Entity",
        from = "Column::FeatureGridSectionId",
        to = "super::feature_grid_section::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    FeatureGridSection,
}

impl Related<super::feature_grid_section::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FeatureGridSection.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
