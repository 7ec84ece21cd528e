//! Contact form section models.

use sea_orm::DbErr;

use crate::{
    model::form::{ContactFormDto, FormFieldDto},
    server::model::section::LayoutParams,
};

/// Contact form definition. Submissions are handled elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFormSection {
    pub id: i32,
    pub heading: String,
    pub description: Option<String>,
    pub submit_label: String,
    pub success_message: Option<String>,
    pub fields: Vec<FormField>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub field_type: String,
    pub required: bool,
    /// Width hint, `full` or `half`.
    pub width: String,
    pub placeholder: Option<String>,
    /// Choices for select/radio fields, empty otherwise.
    pub options: Vec<String>,
}

impl FormField {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// Decodes the stored JSON array of options. A missing or blank column is an empty
    /// option list.
    ///
    /// # Arguments
    /// - `entity` - The form field entity from the database
    ///
    /// # Returns
    /// - `Ok(FormField)` - Successfully converted field
    /// - `Err(DbErr::Custom)` - Stored options are not a JSON array of strings
    pub fn from_entity(entity: entity::form_field::Model) -> Result<Self, DbErr> {
        let options = match entity.options.as_deref().map(str::trim) {
            None | Some("") => Vec::new(),
            Some(raw) => serde_json::from_str::<Vec<String>>(raw).map_err(|e| {
                DbErr::Custom(format!(
                    "Failed to parse options for form field {}: {}",
                    entity.id, e
                ))
            })?,
        };

        Ok(Self {
            name: entity.name,
            label: entity.label,
            field_type: entity.field_type,
            required: entity.is_required,
            width: entity.width,
            placeholder: entity.placeholder,
            options,
        })
    }

    pub fn into_dto(self) -> FormFieldDto {
        FormFieldDto {
            name: self.name,
            label: self.label,
            field_type: self.field_type,
            required: self.required,
            width: self.width,
            placeholder: self.placeholder,
            options: self.options,
        }
    }
}

impl ContactFormSection {
    pub fn from_entity(
        entity: entity::form_section::Model,
        fields: Vec<FormField>,
    ) -> (Self, LayoutParams) {
        let layout = LayoutParams {
            alignment: entity.alignment,
            media_position: None,
            background_style: entity.background_style,
            spacing: entity.spacing,
        };

        let section = Self {
            id: entity.id,
            heading: entity.heading,
            description: entity.description,
            submit_label: entity.submit_label,
            success_message: entity.success_message,
            fields,
        };

        (section, layout)
    }

    pub fn into_dto(self) -> ContactFormDto {
        ContactFormDto {
            heading: self.heading,
            description: self.description,
            submit_label: self.submit_label,
            success_message: self.success_message,
            fields: self.fields.into_iter().map(FormField::into_dto).collect(),
        }
    }
}
