use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::{
    form::{ContactFormSection, FormField},
    section::LayoutParams,
};

pub struct FormSectionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FormSectionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a contact form with its fields ordered by sort order.
    ///
    /// Field options are stored as a JSON array and decoded here.
    ///
    /// # Arguments
    /// - `id` - ID of the form section
    ///
    /// # Returns
    /// - `Ok(Some((ContactFormSection, LayoutParams)))` - Form found and decoded
    /// - `Ok(None)` - No form section with that id
    /// - `Err(DbErr::Custom)` - A field's stored options are not a JSON string array
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<(ContactFormSection, LayoutParams)>, DbErr> {
        let Some(section) = entity::prelude::FormSection::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let fields = entity::prelude::FormField::find()
            .filter(entity::form_field::Column::FormSectionId.eq(id))
            .order_by_asc(entity::form_field::Column::SortOrder)
            .order_by_asc(entity::form_field::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(FormField::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(ContactFormSection::from_entity(section, fields)))
    }
}
