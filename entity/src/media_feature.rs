use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "media_feature")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub media_section_id: i32,
    pub icon: Option<String>,
    pub label: String,
    pub color: Option<String>,
    pub sort_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::media_section::Entity",
        from = "Column::MediaSectionId",
        to = "super::media_section::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    MediaSection,
}

impl Related<super::media_section::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MediaSection.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
