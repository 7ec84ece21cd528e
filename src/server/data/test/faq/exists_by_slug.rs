use super::*;

/// Tests checking for an existing category slug.
///
/// Expected: Ok(true) for a known slug, Ok(false) otherwise
#[tokio::test]
async fn detects_existing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_faq_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let section = factory::create_faq_section(db).await?;
    factory::create_faq_category(db, section.id, "billing", 1).await?;

    let repo = FaqCategoryRepository::new(db);

    assert!(repo.exists_by_slug("billing").await?);
    assert!(!repo.exists_by_slug("shipping").await?);

    Ok(())
}
