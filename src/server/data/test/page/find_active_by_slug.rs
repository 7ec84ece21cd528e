use super::*;
use test_utils::factory::page::PageFactory;

/// Tests finding an active page by slug.
///
/// Verifies that the repository returns the page with its metadata when the slug
/// matches an active page.
///
/// Expected: Ok(Some(page)) with matching slug and metadata
#[tokio::test]
async fn finds_active_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_page_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    PageFactory::new(db)
        .slug("pricing")
        .title("Pricing")
        .meta("Plans and pricing", "Compare our plans")
        .build()
        .await?;

    let repo = PageRepository::new(db);
    let page = repo.find_active_by_slug("pricing").await?;

    assert!(page.is_some());
    let page = page.unwrap();
    assert_eq!(page.slug, "pricing");
    assert_eq!(page.title, "Pricing");
    assert_eq!(page.meta_title.as_deref(), Some("Plans and pricing"));
    assert_eq!(page.meta_description.as_deref(), Some("Compare our plans"));

    Ok(())
}

/// Tests looking up a slug that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_page_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_page(db).await?;

    let repo = PageRepository::new(db);
    let page = repo.find_active_by_slug("does-not-exist").await?;

    assert!(page.is_none());

    Ok(())
}

/// Tests that inactive pages are not resolvable.
///
/// Verifies that a page with `is_active = false` is treated the same as a missing page.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_inactive_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_page_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    PageFactory::new(db).slug("draft").active(false).build().await?;

    let repo = PageRepository::new(db);
    let page = repo.find_active_by_slug("draft").await?;

    assert!(page.is_none());

    Ok(())
}

/// Tests that a missing table surfaces as a database error.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_without_page_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PageRepository::new(db);
    let result = repo.find_active_by_slug("home").await;

    assert!(result.is_err());

    Ok(())
}
