use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_page_table::Page;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PageSection::Table)
                    .if_not_exists()
                    .col(pk_auto(PageSection::Id))
                    .col(integer(PageSection::PageId))
                    .col(string(PageSection::SectionType))
                    .col(integer(PageSection::PayloadId))
                    .col(integer(PageSection::SortOrder).default(0))
                    .col(boolean(PageSection::IsVisible).default(true))
                    .col(timestamp_with_time_zone(PageSection::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_page_section_page_id")
                            .from(PageSection::Table, PageSection::PageId)
                            .to(Page::Table, Page::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_page_section_page_order")
                    .table(PageSection::Table)
                    .col(PageSection::PageId)
                    .col(PageSection::SortOrder)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PageSection::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PageSection {
    Table,
    Id,
    PageId,
    SectionType,
    PayloadId,
    SortOrder,
    IsVisible,
    CreatedAt,
}
