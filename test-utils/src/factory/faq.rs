//! FAQ factories for sections, categories and questions.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an FAQ section with search hidden and category tabs shown.
pub async fn create_faq_section(
    db: &DatabaseConnection,
) -> Result<entity::faq_section::Model, DbErr> {
    entity::faq_section::ActiveModel {
        hero_heading: ActiveValue::Set(format!("Questions {}", next_id())),
        hero_subheading: ActiveValue::Set(None),
        show_search: ActiveValue::Set(false),
        show_category_tabs: ActiveValue::Set(true),
        background_style: ActiveValue::Set(None),
        alignment: ActiveValue::Set(None),
        spacing: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a category in an FAQ section.
pub async fn create_faq_category(
    db: &DatabaseConnection,
    faq_section_id: i32,
    slug: impl Into<String>,
    sort_order: i32,
) -> Result<entity::faq_category::Model, DbErr> {
    let slug = slug.into();
    entity::faq_category::ActiveModel {
        faq_section_id: ActiveValue::Set(faq_section_id),
        name: ActiveValue::Set(slug.to_uppercase()),
        slug: ActiveValue::Set(slug),
        sort_order: ActiveValue::Set(sort_order),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Factory for creating FAQ entries.
pub struct FaqFactory<'a> {
    db: &'a DatabaseConnection,
    faq_category_id: i32,
    question: String,
    sort_order: i32,
    is_active: bool,
}

impl<'a> FaqFactory<'a> {
    /// Creates a new FaqFactory with an auto-numbered question, sort order 0, active.
    pub fn new(db: &'a DatabaseConnection, faq_category_id: i32) -> Self {
        Self {
            db,
            faq_category_id,
            question: format!("Question {}?", next_id()),
            sort_order: 0,
            is_active: true,
        }
    }

    pub fn question(mut self, question: impl Into<String>) -> Self {
        self.question = question.into();
        self
    }

    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub async fn build(self) -> Result<entity::faq::Model, DbErr> {
        entity::faq::ActiveModel {
            faq_category_id: ActiveValue::Set(self.faq_category_id),
            answer: ActiveValue::Set(format!("Answer to {}", self.question)),
            question: ActiveValue::Set(self.question),
            sort_order: ActiveValue::Set(self.sort_order),
            is_active: ActiveValue::Set(self.is_active),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active FAQ entry.
pub async fn create_faq(
    db: &DatabaseConnection,
    faq_category_id: i32,
    question: impl Into<String>,
    sort_order: i32,
) -> Result<entity::faq::Model, DbErr> {
    FaqFactory::new(db, faq_category_id)
        .question(question)
        .sort_order(sort_order)
        .build()
        .await
}
