use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "faq_category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub faq_section_id: i32,
    #[sea_orm(unique)]
    pub slug: String,
    pub name: String,
    pub sort_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::faq_section::Entity",
        from = "Column::FaqSectionId",
        to = "super::faq_section::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    FaqSection,
    #[sea_orm(has_many = "super::faq::Entity")]
    Faq,
}

impl Related<super::faq_section::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FaqSection.def()
    }
}

impl Related<super::faq::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Faq.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
