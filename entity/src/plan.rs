use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "plan")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub pricing_section_id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub cta_label: Option<String>,
    pub cta_url: Option<String>,
    pub is_popular: bool,
    pub is_active: bool,
    pub sort_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pricing_section::Entity",
        from = "Column::PricingSectionId",
        to = "super::pricing_section::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    PricingSection,
    #[sea_orm(has_many = "super::plan_pricing::Entity")]
    PlanPricing,
    #[sea_orm(has_many = "super::plan_feature::Entity")]
    PlanFeature,
    #[sea_orm(has_many = "super::feature_limit::Entity")]
    FeatureLimit,
}

impl Related<super::pricing_section::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PricingSection.def()
    }
}

impl Related<super::plan_pricing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlanPricing.def()
    }
}

impl Related<super::plan_feature::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlanFeature.def()
    }
}

impl Related<super::feature_limit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FeatureLimit.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
