use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HtmlSection::Table)
                    .if_not_exists()
                    .col(pk_auto(HtmlSection::Id))
                    .col(string(HtmlSection::Name))
                    .col(text_null(HtmlSection::HtmlContent))
                    .col(text_null(HtmlSection::CssContent))
                    .col(text_null(HtmlSection::ScriptContent))
                    .col(string(HtmlSection::ScriptPlacement).default("body_end"))
                    .col(string_null(HtmlSection::Spacing))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HtmlSection::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HtmlSection {
    Table,
    Id,
    Name,
    HtmlContent,
    CssContent,
    ScriptContent,
    ScriptPlacement,
    Spacing,
}
