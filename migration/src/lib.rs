pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_page_table;
mod m20260301_000002_create_page_section_table;
mod m20260302_000003_create_media_section_tables;
mod m20260302_000004_create_feature_grid_tables;
mod m20260303_000005_create_pricing_tables;
mod m20260304_000006_create_faq_tables;
mod m20260305_000007_create_form_tables;
mod m20260305_000008_create_html_section_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_page_table::Migration),
            Box::new(m20260301_000002_create_page_section_table::Migration),
            Box::new(m20260302_000003_create_media_section_tables::Migration),
            Box::new(m20260302_000004_create_feature_grid_tables::Migration),
            Box::new(m20260303_000005_create_pricing_tables::Migration),
            Box::new(m20260304_000006_create_faq_tables::Migration),
            Box::new(m20260305_000007_create_form_tables::Migration),
            Box::new(m20260305_000008_create_html_section_table::Migration),
        ]
    }
}
