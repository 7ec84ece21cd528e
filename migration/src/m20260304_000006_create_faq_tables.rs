use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FaqSection::Table)
                    .if_not_exists()
                    .col(pk_auto(FaqSection::Id))
                    .col(string(FaqSection::HeroHeading))
                    .col(text_null(FaqSection::HeroSubheading))
                    .col(boolean(FaqSection::ShowSearch).default(false))
                    .col(boolean(FaqSection::ShowCategoryTabs).default(true))
                    .col(string_null(FaqSection::BackgroundStyle))
                    .col(string_null(FaqSection::Alignment))
                    .col(string_null(FaqSection::Spacing))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FaqCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(FaqCategory::Id))
                    .col(integer(FaqCategory::FaqSectionId))
                    .col(string_uniq(FaqCategory::Slug))
                    .col(string(FaqCategory::Name))
                    .col(integer(FaqCategory::SortOrder).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_faq_category_faq_section_id")
                            .from(FaqCategory::Table, FaqCategory::FaqSectionId)
                            .to(FaqSection::Table, FaqSection::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Faq::Table)
                    .if_not_exists()
                    .col(pk_auto(Faq::Id))
                    .col(integer(Faq::FaqCategoryId))
                    .col(string(Faq::Question))
                    .col(text(Faq::Answer))
                    .col(integer(Faq::SortOrder).default(0))
                    .col(boolean(Faq::IsActive).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_faq_faq_category_id")
                            .from(Faq::Table, Faq::FaqCategoryId)
                            .to(FaqCategory::Table, FaqCategory::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Faq::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FaqCategory::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FaqSection::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FaqSection {
    Table,
    Id,
    HeroHeading,
    HeroSubheading,
    ShowSearch,
    ShowCategoryTabs,
    BackgroundStyle,
    Alignment,
    Spacing,
}

#[derive(DeriveIden)]
pub enum FaqCategory {
    Table,
    Id,
    FaqSectionId,
    Slug,
    Name,
    SortOrder,
}

#[derive(DeriveIden)]
pub enum Faq {
    Table,
    Id,
    FaqCategoryId,
    Question,
    Answer,
    SortOrder,
    IsActive,
}
