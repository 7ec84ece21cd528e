use sea_orm::DatabaseConnection;

use crate::server::{
    data::page::PageRepository, error::composition::CompositionError, model::page::Page,
};

/// Resolves a slug to an active page.
pub struct PageResolver<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PageResolver<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves a page by slug with a single lookup.
    ///
    /// # Returns
    /// - `Ok(Page)` - Active page with the given slug
    /// - `Err(CompositionError::NotFound)` - No active page with that slug
    /// - `Err(CompositionError::RepositoryError)` - Database error during lookup
    pub async fn resolve(&self, slug: &str) -> Result<Page, CompositionError> {
        PageRepository::new(self.db)
            .find_active_by_slug(slug)
            .await?
            .ok_or_else(|| CompositionError::NotFound(slug.to_string()))
    }
}
