use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "media_section")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub layout_type: String,
    pub media_type: String,
    pub media_url: Option<String>,
    pub poster_url: Option<String>,
    pub badge_text: Option<String>,
    pub heading: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub subheading: Option<String>,
    pub text_color: Option<String>,
    pub background_color: Option<String>,
    pub background_style: Option<String>,
    pub alignment: Option<String>,
    pub media_position: Option<String>,
    pub spacing: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::media_feature::Entity")]
    MediaFeature,
}

impl Related<super::media_feature::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MediaFeature.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
