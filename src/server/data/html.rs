use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::{html::HtmlSection, section::LayoutParams};

pub struct HtmlSectionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HtmlSectionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<(HtmlSection, LayoutParams)>, DbErr> {
        let section = entity::prelude::HtmlSection::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(section.map(HtmlSection::from_entity))
    }
}
