use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FaqSectionDto {
    pub hero_heading: String,
    pub hero_subheading: Option<String>,
    pub show_search: bool,
    pub show_category_tabs: bool,
    pub categories: Vec<FaqCategoryDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FaqCategoryDto {
    pub slug: String,
    pub name: String,
    pub faqs: Vec<FaqDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FaqDto {
    pub id: i32,
    pub question: String,
    pub answer: String,
}
