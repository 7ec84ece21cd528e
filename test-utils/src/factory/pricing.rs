//! Pricing factories for sections, plans, billing cycles and per-plan rows.
//!
//! Plans belong to a pricing section; prices reference both a plan and a billing cycle;
//! feature rows either link a shared feature or carry a custom label.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a pricing section with a `"cards"` layout variant.
pub async fn create_pricing_section(
    db: &DatabaseConnection,
) -> Result<entity::pricing_section::Model, DbErr> {
    entity::pricing_section::ActiveModel {
        heading: ActiveValue::Set(format!("Pricing {}", next_id())),
        subheading: ActiveValue::Set(None),
        layout_variant: ActiveValue::Set("cards".to_string()),
        background_style: ActiveValue::Set(None),
        alignment: ActiveValue::Set(Some("center".to_string())),
        spacing: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Factory for creating plans with customizable flags and ordering.
///
/// # Example
///
/// ```rust,ignore
/// let plan = PlanFactory::new(&db, section.id)
///     .name("Pro")
///     .popular(true)
///     .sort_order(2)
///     .build()
///     .await?;
/// ```
pub struct PlanFactory<'a> {
    db: &'a DatabaseConnection,
    pricing_section_id: i32,
    name: String,
    is_popular: bool,
    is_active: bool,
    sort_order: i32,
}

impl<'a> PlanFactory<'a> {
    /// Creates a new PlanFactory.
    ///
    /// Defaults:
    /// - name: `"Plan {id}"`
    /// - active, not popular, sort order 0
    pub fn new(db: &'a DatabaseConnection, pricing_section_id: i32) -> Self {
        Self {
            db,
            pricing_section_id,
            name: format!("Plan {}", next_id()),
            is_popular: false,
            is_active: true,
            sort_order: 0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn popular(mut self, is_popular: bool) -> Self {
        self.is_popular = is_popular;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub async fn build(self) -> Result<entity::plan::Model, DbErr> {
        entity::plan::ActiveModel {
            pricing_section_id: ActiveValue::Set(self.pricing_section_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            cta_label: ActiveValue::Set(Some("Get started".to_string())),
            cta_url: ActiveValue::Set(Some("/signup".to_string())),
            is_popular: ActiveValue::Set(self.is_popular),
            is_active: ActiveValue::Set(self.is_active),
            sort_order: ActiveValue::Set(self.sort_order),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active, non-popular plan in a pricing section.
pub async fn create_plan(
    db: &DatabaseConnection,
    pricing_section_id: i32,
) -> Result<entity::plan::Model, DbErr> {
    PlanFactory::new(db, pricing_section_id).build().await
}

/// Creates a billing cycle.
///
/// # Arguments
/// - `slug` - Unique cycle key such as `"monthly"`
/// - `months` - Length of the cycle, also used as its sort order
/// - `is_default` - Whether the cycle is flagged as the default
pub async fn create_billing_cycle(
    db: &DatabaseConnection,
    slug: impl Into<String>,
    months: i32,
    is_default: bool,
) -> Result<entity::billing_cycle::Model, DbErr> {
    let slug = slug.into();
    entity::billing_cycle::ActiveModel {
        label: ActiveValue::Set(format!("Billed {}", slug)),
        slug: ActiveValue::Set(slug),
        months: ActiveValue::Set(months),
        is_default: ActiveValue::Set(is_default),
        sort_order: ActiveValue::Set(months),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a USD price row for a plan in a billing cycle.
pub async fn create_plan_pricing(
    db: &DatabaseConnection,
    plan_id: i32,
    billing_cycle_id: i32,
    price: i64,
) -> Result<entity::plan_pricing::Model, DbErr> {
    entity::plan_pricing::ActiveModel {
        plan_id: ActiveValue::Set(plan_id),
        billing_cycle_id: ActiveValue::Set(billing_cycle_id),
        price: ActiveValue::Set(price),
        currency: ActiveValue::Set("USD".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a feature in the shared pool.
pub async fn create_shared_feature(
    db: &DatabaseConnection,
    label: impl Into<String>,
) -> Result<entity::shared_feature::Model, DbErr> {
    entity::shared_feature::ActiveModel {
        label: ActiveValue::Set(label.into()),
        icon: ActiveValue::Set(Some("check".to_string())),
        description: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Links a shared feature to a plan.
pub async fn link_shared_feature(
    db: &DatabaseConnection,
    plan_id: i32,
    shared_feature_id: i32,
    is_available: bool,
) -> Result<entity::plan_feature::Model, DbErr> {
    entity::plan_feature::ActiveModel {
        plan_id: ActiveValue::Set(plan_id),
        shared_feature_id: ActiveValue::Set(Some(shared_feature_id)),
        custom_label: ActiveValue::Set(None),
        custom_icon: ActiveValue::Set(None),
        is_available: ActiveValue::Set(is_available),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a custom inline feature on a plan.
pub async fn create_custom_feature(
    db: &DatabaseConnection,
    plan_id: i32,
    label: impl Into<String>,
) -> Result<entity::plan_feature::Model, DbErr> {
    entity::plan_feature::ActiveModel {
        plan_id: ActiveValue::Set(plan_id),
        shared_feature_id: ActiveValue::Set(None),
        custom_label: ActiveValue::Set(Some(label.into())),
        custom_icon: ActiveValue::Set(Some("star".to_string())),
        is_available: ActiveValue::Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a feature limit on a plan.
pub async fn create_feature_limit(
    db: &DatabaseConnection,
    plan_id: i32,
    feature_type: impl Into<String>,
    value: i64,
    is_unlimited: bool,
) -> Result<entity::feature_limit::Model, DbErr> {
    let feature_type = feature_type.into();
    entity::feature_limit::ActiveModel {
        plan_id: ActiveValue::Set(plan_id),
        label: ActiveValue::Set(feature_type.replace('_', " ")),
        feature_type: ActiveValue::Set(feature_type),
        value: ActiveValue::Set(value),
        is_unlimited: ActiveValue::Set(is_unlimited),
        sort_order: ActiveValue::Set(0),
        ..Default::default()
    }
    .insert(db)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_plan_with_pricing_rows() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_pricing_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let section = create_pricing_section(db).await?;
        let plan = create_plan(db, section.id).await?;
        let monthly = create_billing_cycle(db, "monthly", 1, true).await?;
        let pricing = create_plan_pricing(db, plan.id, monthly.id, 2900).await?;

        assert_eq!(plan.pricing_section_id, section.id);
        assert!(plan.is_active);
        assert!(!plan.is_popular);
        assert_eq!(pricing.price, 2900);
        assert_eq!(pricing.billing_cycle_id, monthly.id);

        Ok(())
    }

    #[tokio::test]
    async fn creates_shared_and_custom_features() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_pricing_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let section = create_pricing_section(db).await?;
        let plan = create_plan(db, section.id).await?;
        let shared = create_shared_feature(db, "SSO").await?;

        let linked = link_shared_feature(db, plan.id, shared.id, true).await?;
        let custom = create_custom_feature(db, plan.id, "Dedicated manager").await?;

        assert_eq!(linked.shared_feature_id, Some(shared.id));
        assert!(linked.custom_label.is_none());
        assert!(custom.shared_feature_id.is_none());
        assert_eq!(custom.custom_label.as_deref(), Some("Dedicated manager"));

        Ok(())
    }
}
