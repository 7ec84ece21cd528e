use super::*;

/// Tests that making a cycle default clears every other default.
///
/// Expected: Ok(true) with only the target flagged default
#[tokio::test]
async fn leaves_single_default_cycle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pricing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_billing_cycle(db, "monthly", 1, true).await?;
    let yearly = factory::create_billing_cycle(db, "yearly", 12, false).await?;

    let repo = BillingCycleRepository::new(db);
    let updated = repo.set_default(yearly.id).await?;

    assert!(updated);

    let defaults: Vec<String> = entity::prelude::BillingCycle::find()
        .all(db)
        .await?
        .into_iter()
        .filter(|c| c.is_default)
        .map(|c| c.slug)
        .collect();
    assert_eq!(defaults, vec!["yearly".to_string()]);

    Ok(())
}

/// Tests setting a default cycle that does not exist.
///
/// Expected: Ok(false) with the existing default kept
#[tokio::test]
async fn returns_false_for_missing_cycle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pricing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let monthly = factory::create_billing_cycle(db, "monthly", 1, true).await?;

    let repo = BillingCycleRepository::new(db);
    let updated = repo.set_default(monthly.id + 100).await?;

    assert!(!updated);
    let cycle = entity::prelude::BillingCycle::find_by_id(monthly.id)
        .one(db)
        .await?
        .unwrap();
    assert!(cycle.is_default);

    Ok(())
}
