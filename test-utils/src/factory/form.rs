//! Contact form factories.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a contact form section.
pub async fn create_form_section(
    db: &DatabaseConnection,
) -> Result<entity::form_section::Model, DbErr> {
    entity::form_section::ActiveModel {
        heading: ActiveValue::Set(format!("Contact {}", next_id())),
        description: ActiveValue::Set(None),
        submit_label: ActiveValue::Set("Send".to_string()),
        success_message: ActiveValue::Set(Some("Thanks!".to_string())),
        background_style: ActiveValue::Set(None),
        alignment: ActiveValue::Set(None),
        spacing: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Factory for creating form fields.
///
/// # Example
///
/// ```rust,ignore
/// let field = FormFieldFactory::new(&db, form.id, "topic")
///     .field_type("select")
///     .options(r#"["Sales","Support"]"#)
///     .build()
///     .await?;
/// ```
pub struct FormFieldFactory<'a> {
    db: &'a DatabaseConnection,
    form_section_id: i32,
    name: String,
    field_type: String,
    is_required: bool,
    width: String,
    options: Option<String>,
    sort_order: i32,
}

impl<'a> FormFieldFactory<'a> {
    /// Creates a new FormFieldFactory for an optional, full-width text field.
    pub fn new(db: &'a DatabaseConnection, form_section_id: i32, name: impl Into<String>) -> Self {
        Self {
            db,
            form_section_id,
            name: name.into(),
            field_type: "text".to_string(),
            is_required: false,
            width: "full".to_string(),
            options: None,
            sort_order: 0,
        }
    }

    pub fn field_type(mut self, field_type: impl Into<String>) -> Self {
        self.field_type = field_type.into();
        self
    }

    pub fn required(mut self, is_required: bool) -> Self {
        self.is_required = is_required;
        self
    }

    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = width.into();
        self
    }

    /// Sets the raw options column, expected to hold a JSON array of strings.
    pub fn options(mut self, options: impl Into<String>) -> Self {
        self.options = Some(options.into());
        self
    }

    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub async fn build(self) -> Result<entity::form_field::Model, DbErr> {
        entity::form_field::ActiveModel {
            form_section_id: ActiveValue::Set(self.form_section_id),
            label: ActiveValue::Set(self.name.replace('_', " ")),
            name: ActiveValue::Set(self.name),
            field_type: ActiveValue::Set(self.field_type),
            is_required: ActiveValue::Set(self.is_required),
            width: ActiveValue::Set(self.width),
            placeholder: ActiveValue::Set(None),
            options: ActiveValue::Set(self.options),
            sort_order: ActiveValue::Set(self.sort_order),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an optional text field on a form.
pub async fn create_form_field(
    db: &DatabaseConnection,
    form_section_id: i32,
    name: impl Into<String>,
    sort_order: i32,
) -> Result<entity::form_field::Model, DbErr> {
    FormFieldFactory::new(db, form_section_id, name)
        .sort_order(sort_order)
        .build()
        .await
}
