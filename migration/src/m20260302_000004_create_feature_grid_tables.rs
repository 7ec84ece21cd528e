use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FeatureGridSection::Table)
                    .if_not_exists()
                    .col(pk_auto(FeatureGridSection::Id))
                    .col(string(FeatureGridSection::Heading))
                    .col(text_null(FeatureGridSection::Subheading))
                    .col(integer(FeatureGridSection::Columns).default(3))
                    .col(string_null(FeatureGridSection::BackgroundStyle))
                    .col(string_null(FeatureGridSection::Alignment))
                    .col(string_null(FeatureGridSection::Spacing))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FeatureGridItem::Table)
                    .if_not_exists()
                    .col(pk_auto(FeatureGridItem::Id))
                    .col(integer(FeatureGridItem::FeatureGridSectionId))
                    .col(string_null(FeatureGridItem::Icon))
                    .col(string(FeatureGridItem::Title))
                    .col(text_null(FeatureGridItem::Description))
                    .col(integer(FeatureGridItem::SortOrder).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_feature_grid_item_section_id")
                            .from(FeatureGridItem::Table, FeatureGridItem::FeatureGridSectionId)
                            .to(FeatureGridSection::Table, FeatureGridSection::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FeatureGridItem::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FeatureGridSection::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FeatureGridSection {
    Table,
    Id,
    Heading,
    Subheading,
    Columns,
    BackgroundStyle,
    Alignment,
    Spacing,
}

#[derive(DeriveIden)]
pub enum FeatureGridItem {
    Table,
    Id,
    FeatureGridSectionId,
    Icon,
    Title,
    Description,
    SortOrder,
}
