use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::{
    faq::{FaqCategory, FaqSection},
    section::LayoutParams,
};

pub struct FaqSectionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FaqSectionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets an FAQ section with its categories and active questions.
    ///
    /// Categories are ordered by sort order and each holds its active FAQs ordered by
    /// sort order, ties by id. All FAQs of the selected categories are fetched in a single
    /// query and grouped in memory.
    ///
    /// # Arguments
    /// - `id` - ID of the FAQ section
    /// - `category` - Optional category slug; when set only that category is kept
    ///
    /// # Returns
    /// - `Ok(Some((FaqSection, LayoutParams)))` - Section found
    /// - `Ok(None)` - No FAQ section with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(
        &self,
        id: i32,
        category: Option<&str>,
    ) -> Result<Option<(FaqSection, LayoutParams)>, DbErr> {
        let Some(section) = entity::prelude::FaqSection::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut query = entity::prelude::FaqCategory::find()
            .filter(entity::faq_category::Column::FaqSectionId.eq(id));
        if let Some(slug) = category {
            query = query.filter(entity::faq_category::Column::Slug.eq(slug));
        }
        let categories = query
            .order_by_asc(entity::faq_category::Column::SortOrder)
            .order_by_asc(entity::faq_category::Column::Id)
            .all(self.db)
            .await?;

        let category_ids: Vec<i32> = categories.iter().map(|c| c.id).collect();
        let mut faqs_map: HashMap<i32, Vec<entity::faq::Model>> = HashMap::new();
        if !category_ids.is_empty() {
            let faqs = entity::prelude::Faq::find()
                .filter(entity::faq::Column::FaqCategoryId.is_in(category_ids))
                .filter(entity::faq::Column::IsActive.eq(true))
                .order_by_asc(entity::faq::Column::SortOrder)
                .order_by_asc(entity::faq::Column::Id)
                .all(self.db)
                .await?;

            for faq in faqs {
                faqs_map.entry(faq.faq_category_id).or_default().push(faq);
            }
        }

        let categories = categories
            .into_iter()
            .map(|category| {
                let faqs = faqs_map.remove(&category.id).unwrap_or_default();
                FaqCategory::from_entity(category, faqs)
            })
            .collect();

        Ok(Some(FaqSection::from_entity(section, categories)))
    }
}

pub struct FaqCategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FaqCategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether an FAQ category with the given slug exists.
    ///
    /// # Arguments
    /// - `slug` - Unique category slug
    ///
    /// # Returns
    /// - `Ok(true)` - Category exists
    /// - `Ok(false)` - No category with that slug
    /// - `Err(DbErr)` - Database error during query
    pub async fn exists_by_slug(&self, slug: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::FaqCategory::find()
            .filter(entity::faq_category::Column::Slug.eq(slug))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
