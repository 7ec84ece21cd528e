//! FAQ section models.

use crate::{
    model::faq::{FaqCategoryDto, FaqDto, FaqSectionDto},
    server::model::section::LayoutParams,
};

/// FAQ section with a hero header and questions grouped into categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqSection {
    pub id: i32,
    pub hero_heading: String,
    pub hero_subheading: Option<String>,
    pub show_search: bool,
    pub show_category_tabs: bool,
    /// Categories by sort order; a category scope leaves at most one.
    pub categories: Vec<FaqCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqCategory {
    pub id: i32,
    pub slug: String,
    pub name: String,
    /// Active FAQs only, by sort order.
    pub faqs: Vec<Faq>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Faq {
    pub id: i32,
    pub question: String,
    pub answer: String,
}

impl FaqSection {
    /// Converts the section row and its already-grouped categories into a domain model.
    ///
    /// # Arguments
    /// - `entity` - The FAQ section entity
    /// - `categories` - Ordered categories with their ordered, active FAQs
    ///
    /// # Returns
    /// - `(FaqSection, LayoutParams)` - The payload and its layout hints
    pub fn from_entity(
        entity: entity::faq_section::Model,
        categories: Vec<FaqCategory>,
    ) -> (Self, LayoutParams) {
        let layout = LayoutParams {
            alignment: entity.alignment,
            media_position: None,
            background_style: entity.background_style,
            spacing: entity.spacing,
        };

        let section = Self {
            id: entity.id,
            hero_heading: entity.hero_heading,
            hero_subheading: entity.hero_subheading,
            show_search: entity.show_search,
            show_category_tabs: entity.show_category_tabs,
            categories,
        };

        (section, layout)
    }

    pub fn into_dto(self) -> FaqSectionDto {
        FaqSectionDto {
            hero_heading: self.hero_heading,
            hero_subheading: self.hero_subheading,
            show_search: self.show_search,
            show_category_tabs: self.show_category_tabs,
            categories: self
                .categories
                .into_iter()
                .map(FaqCategory::into_dto)
                .collect(),
        }
    }
}

impl FaqCategory {
    pub fn from_entity(entity: entity::faq_category::Model, faqs: Vec<entity::faq::Model>) -> Self {
        Self {
            id: entity.id,
            slug: entity.slug,
            name: entity.name,
            faqs: faqs
                .into_iter()
                .map(|faq| Faq {
                    id: faq.id,
                    question: faq.question,
                    answer: faq.answer,
                })
                .collect(),
        }
    }

    pub fn into_dto(self) -> FaqCategoryDto {
        FaqCategoryDto {
            slug: self.slug,
            name: self.name,
            faqs: self
                .faqs
                .into_iter()
                .map(|faq| FaqDto {
                    id: faq.id,
                    question: faq.question,
                    answer: faq.answer,
                })
                .collect(),
        }
    }
}
