use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{error::AppError, service::pricing::PricingService};

/// Tests marking a plan popular through the service.
///
/// Expected: Ok(())
#[tokio::test]
async fn sets_popular_plan() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pricing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let section = factory::create_pricing_section(db).await?;
    let plan = factory::create_plan(db, section.id).await?;

    let service = PricingService::new(db);
    let result = service.set_popular_plan(plan.id).await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that a missing plan maps to a not found error.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_plan_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pricing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PricingService::new(db);
    let result = service.set_popular_plan(42).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that a missing billing cycle maps to a not found error.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_billing_cycle_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pricing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_billing_cycle(db, "monthly", 1, true).await?;

    let service = PricingService::new(db);
    let result = service.set_default_billing_cycle(999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
