use sea_orm::DatabaseConnection;

use crate::server::{
    data::pricing::{BillingCycleRepository, PlanRepository},
    error::AppError,
};

/// Content operations that keep pricing flags consistent.
pub struct PricingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PricingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Marks a plan as the single popular plan of its pricing section.
    ///
    /// # Arguments
    /// - `plan_id` - ID of the plan to mark popular
    ///
    /// # Returns
    /// - `Ok(())` - Plan marked popular, siblings cleared
    /// - `Err(AppError::NotFound)` - No plan with that id
    /// - `Err(AppError::DbErr)` - Database error during the update
    pub async fn set_popular_plan(&self, plan_id: i32) -> Result<(), AppError> {
        let updated = PlanRepository::new(self.db).set_popular(plan_id).await?;

        if !updated {
            return Err(AppError::NotFound(format!("Plan {} not found", plan_id)));
        }

        tracing::info!("Plan {} marked as popular", plan_id);

        Ok(())
    }

    /// Makes a billing cycle the system-wide default.
    ///
    /// # Arguments
    /// - `cycle_id` - ID of the billing cycle
    ///
    /// # Returns
    /// - `Ok(())` - Cycle is now the only default
    /// - `Err(AppError::NotFound)` - No billing cycle with that id
    /// - `Err(AppError::DbErr)` - Database error during the update
    pub async fn set_default_billing_cycle(&self, cycle_id: i32) -> Result<(), AppError> {
        let updated = BillingCycleRepository::new(self.db)
            .set_default(cycle_id)
            .await?;

        if !updated {
            return Err(AppError::NotFound(format!(
                "Billing cycle {} not found",
                cycle_id
            )));
        }

        tracing::info!("Billing cycle {} set as default", cycle_id);

        Ok(())
    }
}
