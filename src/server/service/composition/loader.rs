use sea_orm::DatabaseConnection;

use crate::server::{
    data::section::SectionRepository,
    error::composition::CompositionError,
    model::{page::Page, section::SectionRef},
};

/// Loads the ordered, visibility-filtered section references of a page.
pub struct SectionLoader<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SectionLoader<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads visible sections ordered by (sort order, id).
    ///
    /// The returned order is authoritative for the rest of the composition.
    pub async fn load(&self, page: &Page) -> Result<Vec<SectionRef>, CompositionError> {
        let sections = SectionRepository::new(self.db)
            .get_visible_by_page_id(page.id)
            .await?;

        Ok(sections)
    }
}
