use super::*;

/// Tests that hidden sections are filtered out.
///
/// Sets up `[video(1, visible), pricing(2, hidden), faq(3, visible)]` and verifies
/// only the visible sections are returned, in sort order.
///
/// Expected: Ok with [video, faq] at positions 0 and 1
#[tokio::test]
async fn filters_hidden_sections() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_page_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let page = factory::create_page(db).await?;
    PageSectionFactory::new(db, page.id, "video", 10)
        .sort_order(1)
        .build()
        .await?;
    PageSectionFactory::new(db, page.id, "pricing", 20)
        .sort_order(2)
        .visible(false)
        .build()
        .await?;
    PageSectionFactory::new(db, page.id, "faq", 30)
        .sort_order(3)
        .build()
        .await?;

    let repo = SectionRepository::new(db);
    let sections = repo.get_visible_by_page_id(page.id).await?;

    let tags: Vec<&str> = sections.iter().map(|s| s.section_tag.as_str()).collect();
    assert_eq!(tags, vec!["video", "faq"]);
    assert_eq!(sections[0].position, 0);
    assert_eq!(sections[1].position, 1);
    assert_eq!(sections[1].payload_id, 30);

    Ok(())
}

/// Tests that equal sort orders fall back to creation order.
///
/// Expected: Ok with sections ordered by id when sort orders collide
#[tokio::test]
async fn breaks_sort_order_ties_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_page_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let page = factory::create_page(db).await?;
    let first = PageSectionFactory::new(db, page.id, "html", 1)
        .sort_order(4)
        .build()
        .await?;
    let second = PageSectionFactory::new(db, page.id, "media", 2)
        .sort_order(4)
        .build()
        .await?;
    let leading = PageSectionFactory::new(db, page.id, "faq", 3)
        .sort_order(0)
        .build()
        .await?;

    let repo = SectionRepository::new(db);
    let sections = repo.get_visible_by_page_id(page.id).await?;

    let ids: Vec<i32> = sections.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![leading.id, first.id, second.id]);

    Ok(())
}

/// Tests that sections of other pages are not returned.
///
/// Expected: Ok with only the requested page's sections
#[tokio::test]
async fn scopes_to_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_page_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let page = factory::create_page(db).await?;
    let other = factory::create_page(db).await?;
    factory::create_section(db, page.id, "media", 1).await?;
    factory::create_section(db, other.id, "faq", 2).await?;

    let repo = SectionRepository::new(db);
    let sections = repo.get_visible_by_page_id(page.id).await?;

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].page_id, page.id);

    Ok(())
}

/// Tests a page without sections.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_page_without_sections() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_page_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let page = factory::create_page(db).await?;

    let repo = SectionRepository::new(db);
    let sections = repo.get_visible_by_page_id(page.id).await?;

    assert!(sections.is_empty());

    Ok(())
}
