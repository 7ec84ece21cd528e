use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "form_section")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub heading: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub submit_label: String,
    pub success_message: Option<String>,
    pub background_style: Option<String>,
    pub alignment: Option<String>,
    pub spacing: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::form_field::Entity")]
    FormField,
}

impl Related<super::form_field::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FormField.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
