use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MediaSection::Table)
                    .if_not_exists()
                    .col(pk_auto(MediaSection::Id))
                    .col(string(MediaSection::LayoutType))
                    .col(string(MediaSection::MediaType))
                    .col(string_null(MediaSection::MediaUrl))
                    .col(string_null(MediaSection::PosterUrl))
                    .col(string_null(MediaSection::BadgeText))
                    .col(string(MediaSection::Heading))
                    .col(text_null(MediaSection::Subheading))
                    .col(string_null(MediaSection::TextColor))
                    .col(string_null(MediaSection::BackgroundColor))
                    .col(string_null(MediaSection::BackgroundStyle))
                    .col(string_null(MediaSection::Alignment))
                    .col(string_null(MediaSection::MediaPosition))
                    .col(string_null(MediaSection::Spacing))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MediaFeature::Table)
                    .if_not_exists()
                    .col(pk_auto(MediaFeature::Id))
                    .col(integer(MediaFeature::MediaSectionId))
                    .col(string_null(MediaFeature::Icon))
                    .col(string(MediaFeature::Label))
                    .col(string_null(MediaFeature::Color))
                    .col(integer(MediaFeature::SortOrder).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_media_feature_media_section_id")
                            .from(MediaFeature::Table, MediaFeature::MediaSectionId)
                            .to(MediaSection::Table, MediaSection::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MediaFeature::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MediaSection::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MediaSection {
    Table,
    Id,
    LayoutType,
    MediaType,
    MediaUrl,
    PosterUrl,
    BadgeText,
    Heading,
    Subheading,
    TextColor,
    BackgroundColor,
    BackgroundStyle,
    Alignment,
    MediaPosition,
    Spacing,
}

#[derive(DeriveIden)]
pub enum MediaFeature {
    Table,
    Id,
    MediaSectionId,
    Icon,
    Label,
    Color,
    SortOrder,
}
