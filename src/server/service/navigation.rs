use sea_orm::DatabaseConnection;

use crate::server::{data::page::PageRepository, error::AppError, model::page::Navigation};

pub struct NavigationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NavigationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets header and footer navigation built from active, flagged pages.
    pub async fn get_navigation(&self) -> Result<Navigation, AppError> {
        let navigation = PageRepository::new(self.db).get_navigation().await?;

        Ok(navigation)
    }
}
