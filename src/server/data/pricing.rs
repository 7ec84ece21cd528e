//! Pricing section, plan and billing cycle repositories.

use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};
use std::collections::HashMap;

use crate::server::model::{
    pricing::{FeatureLimit, FeatureSource, Plan, PlanPricing, PricingSection},
    section::LayoutParams,
};

pub struct PricingSectionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PricingSectionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a pricing section with its active plans fully hydrated.
    ///
    /// Plans are ordered by sort order. For all plans at once, fetches pricing rows with
    /// their billing cycles, feature links with the shared features they point to, and
    /// limits, then groups them per plan in memory.
    ///
    /// Each plan's features are the union of shared-pool features linked as available and
    /// custom features defined on the plan, in `plan_feature` creation order without
    /// deduplication. Pricing rows are ordered by billing cycle sort order.
    ///
    /// # Arguments
    /// - `id` - ID of the pricing section
    ///
    /// # Returns
    /// - `Ok(Some((PricingSection, LayoutParams)))` - Section found
    /// - `Ok(None)` - No pricing section with that id
    /// - `Err(DbErr)` - Database error during any of the queries
    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<(PricingSection, LayoutParams)>, DbErr> {
        let Some(section) = entity::prelude::PricingSection::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let plans = entity::prelude::Plan::find()
            .filter(entity::plan::Column::PricingSectionId.eq(id))
            .filter(entity::plan::Column::IsActive.eq(true))
            .order_by_asc(entity::plan::Column::SortOrder)
            .order_by_asc(entity::plan::Column::Id)
            .all(self.db)
            .await?;

        if plans.is_empty() {
            return Ok(Some(PricingSection::from_entity(section, Vec::new())));
        }

        let plan_ids: Vec<i32> = plans.iter().map(|p| p.id).collect();

        let mut pricing_map = self.get_pricing_by_plan(&plan_ids).await?;
        let mut features_map = self.get_features_by_plan(&plan_ids).await?;

        let mut limits_map: HashMap<i32, Vec<FeatureLimit>> = HashMap::new();
        let limits = entity::prelude::FeatureLimit::find()
            .filter(entity::feature_limit::Column::PlanId.is_in(plan_ids))
            .order_by_asc(entity::feature_limit::Column::SortOrder)
            .order_by_asc(entity::feature_limit::Column::Id)
            .all(self.db)
            .await?;
        for limit in limits {
            limits_map
                .entry(limit.plan_id)
                .or_default()
                .push(FeatureLimit::from_entity(limit));
        }

        let plans = plans
            .into_iter()
            .map(|plan| {
                let plan_id = plan.id;
                Plan::from_entity(
                    plan,
                    pricing_map.remove(&plan_id).unwrap_or_default(),
                    features_map.remove(&plan_id).unwrap_or_default(),
                    limits_map.remove(&plan_id).unwrap_or_default(),
                )
            })
            .collect();

        Ok(Some(PricingSection::from_entity(section, plans)))
    }

    /// Loads pricing rows for the given plans, tagged with their billing cycle.
    async fn get_pricing_by_plan(
        &self,
        plan_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<PlanPricing>>, DbErr> {
        let rows = entity::prelude::PlanPricing::find()
            .filter(entity::plan_pricing::Column::PlanId.is_in(plan_ids.to_vec()))
            .all(self.db)
            .await?;

        let cycle_ids: Vec<i32> = rows.iter().map(|r| r.billing_cycle_id).collect();
        let cycles_map: HashMap<i32, entity::billing_cycle::Model> = if !cycle_ids.is_empty() {
            entity::prelude::BillingCycle::find()
                .filter(entity::billing_cycle::Column::Id.is_in(cycle_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|c| (c.id, c))
                .collect()
        } else {
            HashMap::new()
        };

        // Keyed by (cycle sort order, cycle id) for ordering within each plan
        let mut grouped: HashMap<i32, Vec<((i32, i32), PlanPricing)>> = HashMap::new();
        for row in rows {
            let Some(cycle) = cycles_map.get(&row.billing_cycle_id) else {
                tracing::warn!(
                    "Plan {} has a price in missing billing cycle {}, skipping",
                    row.plan_id,
                    row.billing_cycle_id
                );
                continue;
            };
            grouped
                .entry(row.plan_id)
                .or_default()
                .push(((cycle.sort_order, cycle.id), PlanPricing::from_entity(row, cycle)));
        }

        Ok(grouped
            .into_iter()
            .map(|(plan_id, mut rows)| {
                rows.sort_by_key(|(key, _)| *key);
                (plan_id, rows.into_iter().map(|(_, pricing)| pricing).collect())
            })
            .collect())
    }

    /// Loads the displayed features for the given plans in `plan_feature` id order.
    async fn get_features_by_plan(
        &self,
        plan_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<FeatureSource>>, DbErr> {
        let links = entity::prelude::PlanFeature::find()
            .filter(entity::plan_feature::Column::PlanId.is_in(plan_ids.to_vec()))
            .order_by_asc(entity::plan_feature::Column::Id)
            .all(self.db)
            .await?;

        let shared_ids: Vec<i32> = links.iter().filter_map(|l| l.shared_feature_id).collect();
        let shared_map: HashMap<i32, entity::shared_feature::Model> = if !shared_ids.is_empty() {
            entity::prelude::SharedFeature::find()
                .filter(entity::shared_feature::Column::Id.is_in(shared_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|f| (f.id, f))
                .collect()
        } else {
            HashMap::new()
        };

        let mut grouped: HashMap<i32, Vec<FeatureSource>> = HashMap::new();
        for link in links {
            let plan_id = link.plan_id;
            let shared_feature_id = link.shared_feature_id;
            let feature = match shared_feature_id {
                Some(_) if !link.is_available => continue,
                Some(shared_id) => match shared_map.get(&shared_id) {
                    Some(shared) => FeatureSource::shared(shared),
                    None => {
                        tracing::warn!(
                            "Plan {} links missing shared feature {}, skipping",
                            plan_id,
                            shared_id
                        );
                        continue;
                    }
                },
                None => FeatureSource::custom(link),
            };
            grouped.entry(plan_id).or_default().push(feature);
        }

        Ok(grouped)
    }
}

pub struct PlanRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Marks a plan as the popular plan of its pricing section.
    ///
    /// In a single transaction, clears the popular flag on every plan of the same
    /// pricing section and then sets it on the target, so a section never ends up with
    /// more than one popular plan.
    ///
    /// # Arguments
    /// - `plan_id` - ID of the plan to mark popular
    ///
    /// # Returns
    /// - `Ok(true)` - Plan found and marked popular
    /// - `Ok(false)` - No plan with that id; nothing changed
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn set_popular(&self, plan_id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let Some(plan) = entity::prelude::Plan::find_by_id(plan_id).one(&txn).await? else {
            txn.rollback().await?;
            return Ok(false);
        };

        entity::prelude::Plan::update_many()
            .filter(entity::plan::Column::PricingSectionId.eq(plan.pricing_section_id))
            .col_expr(entity::plan::Column::IsPopular, Expr::value(false))
            .exec(&txn)
            .await?;

        entity::prelude::Plan::update_many()
            .filter(entity::plan::Column::Id.eq(plan_id))
            .col_expr(entity::plan::Column::IsPopular, Expr::value(true))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(true)
    }
}

pub struct BillingCycleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BillingCycleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Makes a billing cycle the system-wide default.
    ///
    /// Clears the default flag on every cycle and sets it on the target inside one
    /// transaction.
    ///
    /// # Arguments
    /// - `cycle_id` - ID of the billing cycle
    ///
    /// # Returns
    /// - `Ok(true)` - Cycle found and made default
    /// - `Ok(false)` - No cycle with that id; nothing changed
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn set_default(&self, cycle_id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        if entity::prelude::BillingCycle::find_by_id(cycle_id)
            .one(&txn)
            .await?
            .is_none()
        {
            txn.rollback().await?;
            return Ok(false);
        }

        entity::prelude::BillingCycle::update_many()
            .col_expr(entity::billing_cycle::Column::IsDefault, Expr::value(false))
            .exec(&txn)
            .await?;

        entity::prelude::BillingCycle::update_many()
            .filter(entity::billing_cycle::Column::Id.eq(cycle_id))
            .col_expr(entity::billing_cycle::Column::IsDefault, Expr::value(true))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(true)
    }
}
