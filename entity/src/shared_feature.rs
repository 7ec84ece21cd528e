use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "shared_feature")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub label: String,
    pub icon: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::plan_feature::Entity")]
    PlanFeature,
}

impl Related<super::plan_feature::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlanFeature.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
