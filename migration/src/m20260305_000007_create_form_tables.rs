use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FormSection::Table)
                    .if_not_exists()
                    .col(pk_auto(FormSection::Id))
                    .col(string(FormSection::Heading))
                    .col(text_null(FormSection::Description))
                    .col(string(FormSection::SubmitLabel))
                    .col(string_null(FormSection::SuccessMessage))
                    .col(string_null(FormSection::BackgroundStyle))
                    .col(string_null(FormSection::Alignment))
                    .col(string_null(FormSection::Spacing))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FormField::Table)
                    .if_not_exists()
                    .col(pk_auto(FormField::Id))
                    .col(integer(FormField::FormSectionId))
                    .col(string(FormField::Name))
                    .col(string(FormField::Label))
                    .col(string(FormField::FieldType))
                    .col(boolean(FormField::IsRequired).default(false))
                    .col(string(FormField::Width).default("full"))
                    .col(string_null(FormField::Placeholder))
                    .col(text_null(FormField::Options))
                    .col(integer(FormField::SortOrder).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_form_field_form_section_id")
                            .from(FormField::Table, FormField::FormSectionId)
                            .to(FormSection::Table, FormSection::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FormField::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FormSection::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FormSection {
    Table,
    Id,
    Heading,
    Description,
    SubmitLabel,
    SuccessMessage,
    BackgroundStyle,
    Alignment,
    Spacing,
}

#[derive(DeriveIden)]
pub enum FormField {
    Table,
    Id,
    FormSectionId,
    Name,
    Label,
    FieldType,
    IsRequired,
    Width,
    Placeholder,
    Options,
    SortOrder,
}
