use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BillingCycle::Table)
                    .if_not_exists()
                    .col(pk_auto(BillingCycle::Id))
                    .col(string_uniq(BillingCycle::Slug))
                    .col(string(BillingCycle::Label))
                    .col(integer(BillingCycle::Months))
                    .col(boolean(BillingCycle::IsDefault).default(false))
                    .col(integer(BillingCycle::SortOrder).default(0))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SharedFeature::Table)
                    .if_not_exists()
                    .col(pk_auto(SharedFeature::Id))
                    .col(string(SharedFeature::Label))
                    .col(string_null(SharedFeature::Icon))
                    .col(text_null(SharedFeature::Description))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PricingSection::Table)
                    .if_not_exists()
                    .col(pk_auto(PricingSection::Id))
                    .col(string(PricingSection::Heading))
                    .col(text_null(PricingSection::Subheading))
                    .col(string(PricingSection::LayoutVariant))
                    .col(string_null(PricingSection::BackgroundStyle))
                    .col(string_null(PricingSection::Alignment))
                    .col(string_null(PricingSection::Spacing))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Plan::Table)
                    .if_not_exists()
                    .col(pk_auto(Plan::Id))
                    .col(integer(Plan::PricingSectionId))
                    .col(string(Plan::Name))
                    .col(text_null(Plan::Description))
                    .col(string_null(Plan::CtaLabel))
                    .col(string_null(Plan::CtaUrl))
                    .col(boolean(Plan::IsPopular).default(false))
                    .col(boolean(Plan::IsActive).default(true))
                    .col(integer(Plan::SortOrder).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_plan_pricing_section_id")
                            .from(Plan::Table, Plan::PricingSectionId)
                            .to(PricingSection::Table, PricingSection::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PlanPricing::Table)
                    .if_not_exists()
                    .col(pk_auto(PlanPricing::Id))
                    .col(integer(PlanPricing::PlanId))
                    .col(integer(PlanPricing::BillingCycleId))
                    .col(big_integer(PlanPricing::Price))
                    .col(string(PlanPricing::Currency))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_plan_pricing_plan_id")
                            .from(PlanPricing::Table, PlanPricing::PlanId)
                            .to(Plan::Table, Plan::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_plan_pricing_billing_cycle_id")
                            .from(PlanPricing::Table, PlanPricing::BillingCycleId)
                            .to(BillingCycle::Table, BillingCycle::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PlanFeature::Table)
                    .if_not_exists()
                    .col(pk_auto(PlanFeature::Id))
                    .col(integer(PlanFeature::PlanId))
                    .col(integer_null(PlanFeature::SharedFeatureId))
                    .col(string_null(PlanFeature::CustomLabel))
                    .col(string_null(PlanFeature::CustomIcon))
                    .col(boolean(PlanFeature::IsAvailable).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_plan_feature_plan_id")
                            .from(PlanFeature::Table, PlanFeature::PlanId)
                            .to(Plan::Table, Plan::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_plan_feature_shared_feature_id")
                            .from(PlanFeature::Table, PlanFeature::SharedFeatureId)
                            .to(SharedFeature::Table, SharedFeature::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FeatureLimit::Table)
                    .if_not_exists()
                    .col(pk_auto(FeatureLimit::Id))
                    .col(integer(FeatureLimit::PlanId))
                    .col(string(FeatureLimit::FeatureType))
                    .col(string(FeatureLimit::Label))
                    .col(big_integer(FeatureLimit::Value).default(0))
                    .col(boolean(FeatureLimit::IsUnlimited).default(false))
                    .col(integer(FeatureLimit::SortOrder).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_feature_limit_plan_id")
                            .from(FeatureLimit::Table, FeatureLimit::PlanId)
                            .to(Plan::Table, Plan::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FeatureLimit::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PlanFeature::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PlanPricing::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Plan::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PricingSection::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SharedFeature::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BillingCycle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BillingCycle {
    Table,
    Id,
    Slug,
    Label,
    Months,
    IsDefault,
    SortOrder,
}

#[derive(DeriveIden)]
pub enum SharedFeature {
    Table,
    Id,
    Label,
    Icon,
    Description,
}

#[derive(DeriveIden)]
pub enum PricingSection {
    Table,
    Id,
    Heading,
    Subheading,
    LayoutVariant,
    BackgroundStyle,
    Alignment,
    Spacing,
}

#[derive(DeriveIden)]
pub enum Plan {
    Table,
    Id,
    PricingSectionId,
    Name,
    Description,
    CtaLabel,
    CtaUrl,
    IsPopular,
    IsActive,
    SortOrder,
}

#[derive(DeriveIden)]
pub enum PlanPricing {
    Table,
    Id,
    PlanId,
    BillingCycleId,
    Price,
    Currency,
}

#[derive(DeriveIden)]
pub enum PlanFeature {
    Table,
    Id,
    PlanId,
    SharedFeatureId,
    CustomLabel,
    CustomIcon,
    IsAvailable,
}

#[derive(DeriveIden)]
pub enum FeatureLimit {
    Table,
    Id,
    PlanId,
    FeatureType,
    Label,
    Value,
    IsUnlimited,
    SortOrder,
}
