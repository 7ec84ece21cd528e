use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::page::PageFactory};

use crate::server::service::navigation::NavigationService;

/// Tests building navigation DTOs from flagged pages.
///
/// Expected: Ok with header and footer links carrying slug and title
#[tokio::test]
async fn builds_navigation_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_page_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    PageFactory::new(db)
        .slug("pricing")
        .title("Pricing")
        .show_in_header(true)
        .build()
        .await?;
    PageFactory::new(db)
        .slug("privacy")
        .title("Privacy")
        .show_in_footer(true)
        .build()
        .await?;

    let service = NavigationService::new(db);
    let navigation = service.get_navigation().await.unwrap().into_dto();

    assert_eq!(navigation.header.len(), 1);
    assert_eq!(navigation.header[0].slug, "pricing");
    assert_eq!(navigation.header[0].title, "Pricing");
    assert_eq!(navigation.footer.len(), 1);
    assert_eq!(navigation.footer[0].slug, "privacy");

    Ok(())
}
