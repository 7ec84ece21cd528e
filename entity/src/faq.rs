use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "faq")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub faq_category_id: i32,
    pub question: String,
    #[sea_orm(column_type = "Text")]
    pub answer: String,
    pub sort_order: i32,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::faq_category::Entity",
        from = "Column::FaqCategoryId",
        to = "super::faq_category::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    FaqCategory,
}

impl Related<super::faq_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FaqCategory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
