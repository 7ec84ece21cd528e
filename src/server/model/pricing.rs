//! Pricing section domain models.
//!
//! A pricing section lists active plans, each with one price per billing cycle, a
//! feature list mixing shared-pool and plan-specific features, and typed usage limits.

use std::fmt;

use crate::{
    model::pricing::{
        FeatureLimitDto, LimitValueDto, PlanDto, PlanFeatureDto, PlanPricingDto,
        PricingSectionDto, UNLIMITED_TOKEN,
    },
    server::model::section::LayoutParams,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingSection {
    pub id: i32,
    pub heading: String,
    pub subheading: Option<String>,
    pub layout_variant: String,
    /// Active plans by sort order.
    pub plans: Vec<Plan>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub cta_label: Option<String>,
    pub cta_url: Option<String>,
    pub is_popular: bool,
    /// One row per billing cycle the plan is priced for, by cycle sort order.
    pub pricing: Vec<PlanPricing>,
    /// Shared and custom features interleaved in creation order.
    pub features: Vec<FeatureSource>,
    pub limits: Vec<FeatureLimit>,
}

/// Price of a plan for one billing cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanPricing {
    pub billing_cycle: String,
    pub billing_cycle_label: String,
    pub months: i32,
    pub is_default: bool,
    /// Price in minor currency units.
    pub price: i64,
    pub currency: String,
}

impl PlanPricing {
    /// Tags a plan price row with its billing cycle.
    ///
    /// # Arguments
    /// - `entity` - The plan pricing row
    /// - `cycle` - The billing cycle the row is keyed by
    ///
    /// # Returns
    /// - `PlanPricing` - Price tagged with cycle slug, label, months and default flag
    pub fn from_entity(
        entity: entity::plan_pricing::Model,
        cycle: &entity::billing_cycle::Model,
    ) -> Self {
        Self {
            billing_cycle: cycle.slug.clone(),
            billing_cycle_label: cycle.label.clone(),
            months: cycle.months,
            is_default: cycle.is_default,
            price: entity.price,
            currency: entity.currency,
        }
    }

    pub fn into_dto(self) -> PlanPricingDto {
        PlanPricingDto {
            billing_cycle: self.billing_cycle,
            billing_cycle_label: self.billing_cycle_label,
            months: self.months,
            is_default: self.is_default,
            price: self.price,
            currency: self.currency,
        }
    }
}

/// Where a displayed plan feature comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureSource {
    /// Feature from the shared pool, linked to the plan and marked available.
    Shared {
        shared_feature_id: i32,
        label: String,
        icon: Option<String>,
        description: Option<String>,
    },
    /// Feature defined inline on the plan.
    Custom { label: String, icon: Option<String> },
}

impl FeatureSource {
    pub fn shared(entity: &entity::shared_feature::Model) -> Self {
        FeatureSource::Shared {
            shared_feature_id: entity.id,
            label: entity.label.clone(),
            icon: entity.icon.clone(),
            description: entity.description.clone(),
        }
    }

    pub fn custom(entity: entity::plan_feature::Model) -> Self {
        FeatureSource::Custom {
            label: entity.custom_label.unwrap_or_default(),
            icon: entity.custom_icon,
        }
    }

    pub fn into_dto(self) -> PlanFeatureDto {
        match self {
            FeatureSource::Shared {
                shared_feature_id,
                label,
                icon,
                description,
            } => PlanFeatureDto::Shared {
                shared_feature_id,
                label,
                icon,
                description,
            },
            FeatureSource::Custom { label, icon } => PlanFeatureDto::Custom { label, icon },
        }
    }
}

/// Resolved value of a feature limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitValue {
    Unlimited,
    Value(i64),
}

impl LimitValue {
    /// Resolves the stored pair into a limit value.
    ///
    /// The unlimited flag wins over whatever number is stored. Otherwise the number is
    /// kept verbatim, zero included.
    pub fn from_row(value: i64, is_unlimited: bool) -> Self {
        if is_unlimited {
            LimitValue::Unlimited
        } else {
            LimitValue::Value(value)
        }
    }

    pub fn into_dto(self) -> LimitValueDto {
        match self {
            LimitValue::Unlimited => LimitValueDto::Unlimited,
            LimitValue::Value(value) => LimitValueDto::Value(value),
        }
    }
}

impl fmt::Display for LimitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LimitValue::Unlimited => f.write_str(UNLIMITED_TOKEN),
            LimitValue::Value(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureLimit {
    pub feature_type: String,
    pub label: String,
    pub value: LimitValue,
}

impl FeatureLimit {
    pub fn from_entity(entity: entity::feature_limit::Model) -> Self {
        Self {
            value: LimitValue::from_row(entity.value, entity.is_unlimited),
            feature_type: entity.feature_type,
            label: entity.label,
        }
    }

    pub fn into_dto(self) -> FeatureLimitDto {
        FeatureLimitDto {
            feature_type: self.feature_type,
            label: self.label,
            display: self.value.to_string(),
            value: self.value.into_dto(),
        }
    }
}

impl Plan {
    pub fn from_entity(
        entity: entity::plan::Model,
        pricing: Vec<PlanPricing>,
        features: Vec<FeatureSource>,
        limits: Vec<FeatureLimit>,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            cta_label: entity.cta_label,
            cta_url: entity.cta_url,
            is_popular: entity.is_popular,
            pricing,
            features,
            limits,
        }
    }

    pub fn into_dto(self) -> PlanDto {
        PlanDto {
            id: self.id,
            name: self.name,
            description: self.description,
            cta_label: self.cta_label,
            cta_url: self.cta_url,
            is_popular: self.is_popular,
            pricing: self.pricing.into_iter().map(PlanPricing::into_dto).collect(),
            features: self
                .features
                .into_iter()
                .map(FeatureSource::into_dto)
                .collect(),
            limits: self.limits.into_iter().map(FeatureLimit::into_dto).collect(),
        }
    }
}

impl PricingSection {
    pub fn from_entity(
        entity: entity::pricing_section::Model,
        plans: Vec<Plan>,
    ) -> (Self, LayoutParams) {
        let layout = LayoutParams {
            alignment: entity.alignment,
            media_position: None,
            background_style: entity.background_style,
            spacing: entity.spacing,
        };

        let section = Self {
            id: entity.id,
            heading: entity.heading,
            subheading: entity.subheading,
            layout_variant: entity.layout_variant,
            plans,
        };

        (section, layout)
    }

    pub fn into_dto(self) -> PricingSectionDto {
        PricingSectionDto {
            heading: self.heading,
            subheading: self.subheading,
            layout_variant: self.layout_variant,
            plans: self.plans.into_iter().map(Plan::into_dto).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_flag_overrides_stored_value() {
        assert_eq!(LimitValue::from_row(-1, true), LimitValue::Unlimited);
        assert_eq!(LimitValue::from_row(500, true), LimitValue::Unlimited);
        assert_eq!(LimitValue::from_row(500, true).to_string(), "unlimited");
    }

    #[test]
    fn zero_is_kept_verbatim() {
        let value = LimitValue::from_row(0, false);

        assert_eq!(value, LimitValue::Value(0));
        assert_eq!(value.to_string(), "0");
    }

    #[test]
    fn limit_dto_carries_display() {
        let dto = FeatureLimit {
            feature_type: "projects".to_string(),
            label: "Projects".to_string(),
            value: LimitValue::Value(25),
        }
        .into_dto();

        assert_eq!(dto.value, LimitValueDto::Value(25));
        assert_eq!(dto.display, "25");
    }
}
