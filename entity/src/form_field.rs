use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "form_field")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub form_section_id: i32,
    pub name: String,
    pub label: String,
    pub field_type: String,
    pub is_required: bool,
    /// Layout width hint, `"full"` or `"half"`.
    pub width: String,
    pub placeholder: Option<String>,
    /// JSON array of option labels for choice fields.
    #[sea_orm(column_type = "Text", nullable)]
    pub options: Option<String>,
    pub sort_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::form_section::Entity",
        from = "Column::FormSectionId",
        to = "super::form_section::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    FormSection,
}

impl Related<super::form_section::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FormSection.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
