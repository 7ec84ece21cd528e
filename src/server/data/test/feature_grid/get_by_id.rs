use super::*;
use entity::prelude::{FeatureGridItem, FeatureGridSection};

/// Tests loading a feature grid with items ordered by sort order.
///
/// Expected: Ok(Some) with items ordered and column count preserved
#[tokio::test]
async fn loads_feature_grid_items_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(FeatureGridSection)
        .with_table(FeatureGridItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let grid = factory::create_feature_grid_section(db).await?;
    factory::create_feature_grid_item(db, grid.id, "Analytics", 2).await?;
    factory::create_feature_grid_item(db, grid.id, "Backups", 1).await?;

    let repo = FeatureGridRepository::new(db);
    let (section, _) = repo.get_by_id(grid.id).await?.unwrap();

    assert_eq!(section.columns, 3);
    let titles: Vec<&str> = section.items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["Backups", "Analytics"]);

    Ok(())
}
