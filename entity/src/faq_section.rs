use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "faq_section")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub hero_heading: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub hero_subheading: Option<String>,
    pub show_search: bool,
    pub show_category_tabs: bool,
    pub background_style: Option<String>,
    pub alignment: Option<String>,
    pub spacing: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::faq_category::Entity")]
    FaqCategory,
}

impl Related<super::faq_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FaqCategory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
