use super::*;
use test_utils::factory::faq::FaqFactory;

/// Tests loading categories and active FAQs in sort order.
///
/// Creates two categories out of order, each with FAQs out of order and one inactive
/// FAQ, and verifies grouping, ordering and the active filter.
///
/// Expected: Ok(Some) with [general, billing] and only active FAQs in sort order
#[tokio::test]
async fn loads_categories_with_active_faqs() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_faq_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let section = factory::create_faq_section(db).await?;
    let billing = factory::create_faq_category(db, section.id, "billing", 2).await?;
    let general = factory::create_faq_category(db, section.id, "general", 1).await?;

    factory::create_faq(db, general.id, "What is it?", 2).await?;
    factory::create_faq(db, general.id, "Who is it for?", 1).await?;
    factory::create_faq(db, billing.id, "Can I get a refund?", 1).await?;
    FaqFactory::new(db, billing.id)
        .question("Old question?")
        .active(false)
        .build()
        .await?;

    let repo = FaqSectionRepository::new(db);
    let (faq_section, _) = repo.get_by_id(section.id, None).await?.unwrap();

    let slugs: Vec<&str> = faq_section
        .categories
        .iter()
        .map(|c| c.slug.as_str())
        .collect();
    assert_eq!(slugs, vec!["general", "billing"]);

    let general_questions: Vec<&str> = faq_section.categories[0]
        .faqs
        .iter()
        .map(|f| f.question.as_str())
        .collect();
    assert_eq!(general_questions, vec!["Who is it for?", "What is it?"]);
    assert_eq!(faq_section.categories[1].faqs.len(), 1);

    Ok(())
}

/// Tests scoping an FAQ section to a single category.
///
/// Expected: Ok(Some) with only the requested category
#[tokio::test]
async fn keeps_only_scoped_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_faq_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let section = factory::create_faq_section(db).await?;
    let general = factory::create_faq_category(db, section.id, "general", 1).await?;
    let billing = factory::create_faq_category(db, section.id, "billing", 2).await?;
    factory::create_faq(db, general.id, "What is it?", 1).await?;
    factory::create_faq(db, billing.id, "Can I get a refund?", 1).await?;

    let repo = FaqSectionRepository::new(db);
    let (faq_section, _) = repo.get_by_id(section.id, Some("billing")).await?.unwrap();

    assert_eq!(faq_section.categories.len(), 1);
    assert_eq!(faq_section.categories[0].slug, "billing");
    assert_eq!(
        faq_section.categories[0].faqs[0].question,
        "Can I get a refund?"
    );

    Ok(())
}

/// Tests a category without any active FAQs.
///
/// Expected: Ok(Some) with the category present and an empty FAQ list
#[tokio::test]
async fn keeps_empty_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_faq_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let section = factory::create_faq_section(db).await?;
    factory::create_faq_category(db, section.id, "empty", 1).await?;

    let repo = FaqSectionRepository::new(db);
    let (faq_section, _) = repo.get_by_id(section.id, None).await?.unwrap();

    assert_eq!(faq_section.categories.len(), 1);
    assert!(faq_section.categories[0].faqs.is_empty());

    Ok(())
}

/// Tests loading an FAQ section that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_section() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_faq_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FaqSectionRepository::new(db);
    let result = repo.get_by_id(1, None).await?;

    assert!(result.is_none());

    Ok(())
}
