use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "plan_pricing")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub plan_id: i32,
    pub billing_cycle_id: i32,
    /// Price in minor currency units (cents).
    pub price: i64,
    pub currency: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::plan::Entity",
        from = "Column::PlanId",
        to = "super::plan::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Plan,
    #[sea_orm(
        belongs_to = "super::billing_cycle::Entity",
        from = "Column::BillingCycleId",
        to = "super::billing_cycle::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    BillingCycle,
}

impl Related<super::plan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Plan.def()
    }
}

impl Related<super::billing_cycle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BillingCycle.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
