use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Page::Table)
                    .if_not_exists()
                    .col(pk_auto(Page::Id))
                    .col(string_uniq(Page::Slug))
                    .col(string(Page::Title))
                    .col(string_null(Page::MetaTitle))
                    .col(text_null(Page::MetaDescription))
                    .col(boolean(Page::ShowInHeader).default(false))
                    .col(boolean(Page::ShowInFooter).default(false))
                    .col(integer(Page::SortOrder).default(0))
                    .col(boolean(Page::IsActive).default(true))
                    .col(timestamp_with_time_zone(Page::CreatedAt))
                    .col(timestamp_with_time_zone(Page::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Page::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Page {
    Table,
    Id,
    Slug,
    Title,
    MetaTitle,
    MetaDescription,
    ShowInHeader,
    ShowInFooter,
    SortOrder,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
