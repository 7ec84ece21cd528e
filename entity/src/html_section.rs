use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "html_section")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub html_content: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub css_content: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub script_content: Option<String>,
    /// Where the script should load: `head`, `body_start`, `body_end` or `inline`.
    pub script_placement: String,
    pub spacing: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
