use super::*;
use entity::prelude::{FormField, FormSection};
use test_utils::factory::form::FormFieldFactory;

/// Tests loading a form with ordered fields and decoded options.
///
/// Expected: Ok(Some) with fields [email, topic] and topic options decoded
#[tokio::test]
async fn loads_fields_with_options() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(FormSection)
        .with_table(FormField)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let form = factory::create_form_section(db).await?;
    FormFieldFactory::new(db, form.id, "topic")
        .field_type("select")
        .width("half")
        .options(r#"["Sales","Support"]"#)
        .sort_order(2)
        .build()
        .await?;
    FormFieldFactory::new(db, form.id, "email")
        .field_type("email")
        .required(true)
        .sort_order(1)
        .build()
        .await?;

    let repo = FormSectionRepository::new(db);
    let (section, _) = repo.get_by_id(form.id).await?.unwrap();

    assert_eq!(section.submit_label, "Send");
    assert_eq!(section.fields.len(), 2);
    assert_eq!(section.fields[0].name, "email");
    assert!(section.fields[0].required);
    assert!(section.fields[0].options.is_empty());
    assert_eq!(section.fields[1].name, "topic");
    assert_eq!(section.fields[1].width, "half");
    assert_eq!(section.fields[1].options, vec!["Sales", "Support"]);

    Ok(())
}

/// Tests that malformed options JSON fails the whole load.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_malformed_options() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(FormSection)
        .with_table(FormField)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let form = factory::create_form_section(db).await?;
    FormFieldFactory::new(db, form.id, "topic")
        .field_type("select")
        .options("not json")
        .build()
        .await?;

    let repo = FormSectionRepository::new(db);
    let result = repo.get_by_id(form.id).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
