use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContactFormDto {
    pub heading: String,
    pub description: Option<String>,
    pub submit_label: String,
    pub success_message: Option<String>,
    pub fields: Vec<FormFieldDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FormFieldDto {
    pub name: String,
    pub label: String,
    pub field_type: String,
    pub required: bool,
    pub width: String,
    pub placeholder: Option<String>,
    pub options: Vec<String>,
}
