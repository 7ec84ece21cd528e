use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "billing_cycle")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub slug: String,
    pub label: String,
    pub months: i32,
    /// At most one row system-wide carries `true`.
    pub is_default: bool,
    pub sort_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::plan_pricing::Entity")]
    PlanPricing,
}

impl Related<super::plan_pricing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlanPricing.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
