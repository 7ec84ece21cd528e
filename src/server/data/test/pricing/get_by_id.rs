use super::*;

/// Tests pricing rows for multiple billing cycles.
///
/// A plan priced at 2900 monthly and 29000 yearly must carry both rows, each tagged
/// with its billing cycle, ordered by cycle sort order, with the default flag copied.
///
/// Expected: Ok(Some) with [monthly 2900 (default), yearly 29000]
#[tokio::test]
async fn tags_pricing_rows_with_billing_cycle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pricing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let yearly = factory::create_billing_cycle(db, "yearly", 12, false).await?;
    let monthly = factory::create_billing_cycle(db, "monthly", 1, true).await?;
    let section = factory::create_pricing_section(db).await?;
    let plan = factory::create_plan(db, section.id).await?;
    factory::create_plan_pricing(db, plan.id, yearly.id, 29000).await?;
    factory::create_plan_pricing(db, plan.id, monthly.id, 2900).await?;

    let repo = PricingSectionRepository::new(db);
    let (pricing, layout) = repo.get_by_id(section.id).await?.unwrap();

    assert_eq!(layout.alignment.as_deref(), Some("center"));
    assert_eq!(pricing.plans.len(), 1);
    let rows = &pricing.plans[0].pricing;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].billing_cycle, "monthly");
    assert_eq!(rows[0].price, 2900);
    assert!(rows[0].is_default);
    assert_eq!(rows[1].billing_cycle, "yearly");
    assert_eq!(rows[1].price, 29000);
    assert_eq!(rows[1].months, 12);
    assert!(!rows[1].is_default);

    Ok(())
}

/// Tests that a price pointing at a missing billing cycle is skipped and logged.
///
/// Expected: Ok(Some) with only the monthly row and a warning naming the missing cycle
#[tokio::test]
async fn skips_price_in_missing_billing_cycle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pricing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let monthly = factory::create_billing_cycle(db, "monthly", 1, true).await?;
    let section = factory::create_pricing_section(db).await?;
    let plan = factory::create_plan(db, section.id).await?;
    factory::create_plan_pricing(db, plan.id, monthly.id, 2900).await?;
    db.execute_unprepared("PRAGMA foreign_keys = OFF").await?;
    factory::create_plan_pricing(db, plan.id, 999, 29000).await?;

    let (logs, _guard) = LogCapture::install();
    let repo = PricingSectionRepository::new(db);
    let (pricing, _) = repo.get_by_id(section.id).await?.unwrap();

    let rows = &pricing.plans[0].pricing;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].billing_cycle, "monthly");
    assert!(logs
        .contents()
        .contains(&format!("Plan {} has a price in missing billing cycle 999", plan.id)));

    Ok(())
}

/// Tests the union of shared and custom features.
///
/// Links shared and custom features alternately, including a duplicate label across
/// pools and an unavailable shared feature. Verifies creation order, no dedup, and
/// that unavailable shared features are dropped.
///
/// Expected: Ok(Some) with [Shared SSO, Custom Priority support, Shared Audit log, Custom SSO]
#[tokio::test]
async fn interleaves_shared_and_custom_features() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pricing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let sso = factory::create_shared_feature(db, "SSO").await?;
    let audit = factory::create_shared_feature(db, "Audit log").await?;
    let api = factory::create_shared_feature(db, "API access").await?;
    let section = factory::create_pricing_section(db).await?;
    let plan = factory::create_plan(db, section.id).await?;

    factory::link_shared_feature(db, plan.id, sso.id, true).await?;
    factory::create_custom_feature(db, plan.id, "Priority support").await?;
    factory::link_shared_feature(db, plan.id, api.id, false).await?;
    factory::link_shared_feature(db, plan.id, audit.id, true).await?;
    factory::create_custom_feature(db, plan.id, "SSO").await?;

    let repo = PricingSectionRepository::new(db);
    let (pricing, _) = repo.get_by_id(section.id).await?.unwrap();

    let features = &pricing.plans[0].features;
    assert_eq!(features.len(), 4);
    assert!(matches!(
        &features[0],
        FeatureSource::Shared { shared_feature_id, label, .. }
            if *shared_feature_id == sso.id && label == "SSO"
    ));
    assert!(matches!(
        &features[1],
        FeatureSource::Custom { label, .. } if label == "Priority support"
    ));
    assert!(matches!(
        &features[2],
        FeatureSource::Shared { label, .. } if label == "Audit log"
    ));
    assert!(matches!(
        &features[3],
        FeatureSource::Custom { label, .. } if label == "SSO"
    ));

    Ok(())
}

/// Tests the unlimited sentinel and zero limits.
///
/// Expected: Ok(Some) with -1 and 500 unlimited rows as `Unlimited` and 0 kept as `Value(0)`
#[tokio::test]
async fn resolves_unlimited_and_zero_limits() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pricing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let section = factory::create_pricing_section(db).await?;
    let plan = factory::create_plan(db, section.id).await?;
    factory::create_feature_limit(db, plan.id, "projects", -1, true).await?;
    factory::create_feature_limit(db, plan.id, "seats", 500, true).await?;
    factory::create_feature_limit(db, plan.id, "custom_domains", 0, false).await?;

    let repo = PricingSectionRepository::new(db);
    let (pricing, _) = repo.get_by_id(section.id).await?.unwrap();

    let limits = &pricing.plans[0].limits;
    assert_eq!(limits.len(), 3);
    assert_eq!(limits[0].value, LimitValue::Unlimited);
    assert_eq!(limits[1].value, LimitValue::Unlimited);
    assert_eq!(limits[2].value, LimitValue::Value(0));

    Ok(())
}

/// Tests that only active plans are listed, in sort order.
///
/// Expected: Ok(Some) with [Starter, Pro]; Legacy is excluded
#[tokio::test]
async fn lists_active_plans_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pricing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let section = factory::create_pricing_section(db).await?;
    PlanFactory::new(db, section.id)
        .name("Pro")
        .sort_order(2)
        .build()
        .await?;
    PlanFactory::new(db, section.id)
        .name("Legacy")
        .active(false)
        .sort_order(0)
        .build()
        .await?;
    PlanFactory::new(db, section.id)
        .name("Starter")
        .sort_order(1)
        .build()
        .await?;

    let repo = PricingSectionRepository::new(db);
    let (pricing, _) = repo.get_by_id(section.id).await?.unwrap();

    let names: Vec<&str> = pricing.plans.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Starter", "Pro"]);

    Ok(())
}

/// Tests a pricing section without plans.
///
/// Expected: Ok(Some) with an empty plan list
#[tokio::test]
async fn returns_section_without_plans() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pricing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let section = factory::create_pricing_section(db).await?;

    let repo = PricingSectionRepository::new(db);
    let (pricing, _) = repo.get_by_id(section.id).await?.unwrap();

    assert!(pricing.plans.is_empty());

    Ok(())
}

/// Tests loading a pricing section that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_section() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pricing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PricingSectionRepository::new(db);
    let result = repo.get_by_id(99).await?;

    assert!(result.is_none());

    Ok(())
}
