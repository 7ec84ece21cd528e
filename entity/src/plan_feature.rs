use sea_orm::entity::prelude::*;

/// A feature row on a plan.
///
/// Rows with `shared_feature_id` set reference the shared pool and are only shown when
/// `is_available` is true. Rows without it are custom features described inline by
/// `custom_label` and `custom_icon`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "plan_feature")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub plan_id: i32,
    pub shared_feature_id: Option<i32>,
    pub custom_label: Option<String>,
    pub custom_icon: Option<String>,
    pub is_available: bool,
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
        belongs_to = "super::shared_feature::Entity",
        from = "Column::SharedFeatureId",
        to = "super::shared_feature::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    SharedFeature,
}

impl Related<super::plan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Plan.def()
    }
}

impl Related<super::shared_feature::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SharedFeature.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
