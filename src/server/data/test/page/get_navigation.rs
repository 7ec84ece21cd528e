use super::*;
use test_utils::factory::page::PageFactory;

/// Tests splitting pages into header and footer navigation.
///
/// Verifies that pages appear in each list they are flagged for, that a page flagged
/// for both appears in both, and that unflagged pages are excluded.
///
/// Expected: Ok with header [home, pricing] and footer [pricing, contact]
#[tokio::test]
async fn splits_header_and_footer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_page_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    PageFactory::new(db)
        .slug("home")
        .show_in_header(true)
        .sort_order(1)
        .build()
        .await?;
    PageFactory::new(db)
        .slug("pricing")
        .show_in_header(true)
        .show_in_footer(true)
        .sort_order(2)
        .build()
        .await?;
    PageFactory::new(db)
        .slug("contact")
        .show_in_footer(true)
        .sort_order(3)
        .build()
        .await?;
    PageFactory::new(db).slug("landing-q3").build().await?;

    let repo = PageRepository::new(db);
    let navigation = repo.get_navigation().await?;

    let header: Vec<&str> = navigation.header.iter().map(|l| l.slug.as_str()).collect();
    let footer: Vec<&str> = navigation.footer.iter().map(|l| l.slug.as_str()).collect();
    assert_eq!(header, vec!["home", "pricing"]);
    assert_eq!(footer, vec!["pricing", "contact"]);

    Ok(())
}

/// Tests navigation ordering by sort order with ties broken by id.
///
/// Expected: Ok with pages ordered (sort_order, id) ascending
#[tokio::test]
async fn orders_by_sort_order_then_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_page_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    PageFactory::new(db)
        .slug("b")
        .show_in_header(true)
        .sort_order(5)
        .build()
        .await?;
    PageFactory::new(db)
        .slug("a")
        .show_in_header(true)
        .sort_order(1)
        .build()
        .await?;
    PageFactory::new(db)
        .slug("c")
        .show_in_header(true)
        .sort_order(5)
        .build()
        .await?;

    let repo = PageRepository::new(db);
    let navigation = repo.get_navigation().await?;

    let header: Vec<&str> = navigation.header.iter().map(|l| l.slug.as_str()).collect();
    assert_eq!(header, vec!["a", "b", "c"]);

    Ok(())
}

/// Tests that inactive pages never appear in navigation.
///
/// Expected: Ok with empty header
#[tokio::test]
async fn excludes_inactive_pages() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_page_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    PageFactory::new(db)
        .show_in_header(true)
        .active(false)
        .build()
        .await?;

    let repo = PageRepository::new(db);
    let navigation = repo.get_navigation().await?;

    assert!(navigation.header.is_empty());
    assert!(navigation.footer.is_empty());

    Ok(())
}
