use super::*;

/// Tests that marking a plan popular clears the flag on its siblings.
///
/// Expected: Ok(true) with exactly one popular plan in the section
#[tokio::test]
async fn leaves_single_popular_plan() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pricing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let section = factory::create_pricing_section(db).await?;
    let starter = PlanFactory::new(db, section.id).popular(true).build().await?;
    let pro = factory::create_plan(db, section.id).await?;
    factory::create_plan(db, section.id).await?;

    let repo = PlanRepository::new(db);
    let updated = repo.set_popular(pro.id).await?;

    assert!(updated);

    let plans = entity::prelude::Plan::find().all(db).await?;
    let popular: Vec<i32> = plans.iter().filter(|p| p.is_popular).map(|p| p.id).collect();
    assert_eq!(popular, vec![pro.id]);
    assert!(plans.iter().any(|p| p.id == starter.id && !p.is_popular));

    Ok(())
}

/// Tests that other pricing sections keep their popular plan.
///
/// Expected: Ok(true) with one popular plan per section
#[tokio::test]
async fn leaves_other_sections_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pricing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_pricing_section(db).await?;
    let second = factory::create_pricing_section(db).await?;
    let other_popular = PlanFactory::new(db, second.id).popular(true).build().await?;
    let target = factory::create_plan(db, first.id).await?;

    let repo = PlanRepository::new(db);
    repo.set_popular(target.id).await?;

    let other = entity::prelude::Plan::find_by_id(other_popular.id)
        .one(db)
        .await?
        .unwrap();
    assert!(other.is_popular);

    Ok(())
}

/// Tests marking a plan that does not exist.
///
/// Expected: Ok(false) and no plan changed
#[tokio::test]
async fn returns_false_for_missing_plan() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pricing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let section = factory::create_pricing_section(db).await?;
    let popular = PlanFactory::new(db, section.id).popular(true).build().await?;

    let repo = PlanRepository::new(db);
    let updated = repo.set_popular(popular.id + 100).await?;

    assert!(!updated);
    let plan = entity::prelude::Plan::find_by_id(popular.id)
        .one(db)
        .await?
        .unwrap();
    assert!(plan.is_popular);

    Ok(())
}
