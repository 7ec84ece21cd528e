use super::*;
use entity::prelude::HtmlSection;

/// Tests loading an HTML section verbatim.
///
/// Expected: Ok(Some) with script placement preserved
#[tokio::test]
async fn loads_html_section() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(HtmlSection)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let html = factory::create_html_section(db).await?;

    let repo = HtmlSectionRepository::new(db);
    let (section, layout) = repo.get_by_id(html.id).await?.unwrap();

    assert_eq!(section.html, html.html_content);
    assert_eq!(section.script_placement, "body_end");
    assert!(layout.alignment.is_none());

    Ok(())
}

/// Tests loading an HTML section that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_section() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(HtmlSection)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HtmlSectionRepository::new(db);
    let result = repo.get_by_id(404).await?;

    assert!(result.is_none());

    Ok(())
}
