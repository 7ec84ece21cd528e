use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Display token emitted for a feature limit flagged as unlimited.
pub const UNLIMITED_TOKEN: &str = "unlimited";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PricingSectionDto {
    pub heading: String,
    pub subheading: Option<String>,
    pub layout_variant: String,
    pub plans: Vec<PlanDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlanDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub cta_label: Option<String>,
    pub cta_url: Option<String>,
    pub is_popular: bool,
    pub pricing: Vec<PlanPricingDto>,
    pub features: Vec<PlanFeatureDto>,
    pub limits: Vec<FeatureLimitDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlanPricingDto {
    /// Billing cycle slug, e.g. `monthly`.
    pub billing_cycle: String,
    pub billing_cycle_label: String,
    pub months: i32,
    pub is_default: bool,
    /// Price in minor currency units.
    pub price: i64,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum PlanFeatureDto {
    Shared {
        shared_feature_id: i32,
        label: String,
        icon: Option<String>,
        description: Option<String>,
    },
    Custom {
        label: String,
        icon: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FeatureLimitDto {
    pub feature_type: String,
    pub label: String,
    /// Either the `"unlimited"` token or the numeric limit.
    #[schema(value_type = Object)]
    pub value: LimitValueDto,
    pub display: String,
}

/// Limit value as sent over the wire: the `"unlimited"` token or a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitValueDto {
    Unlimited,
    Value(i64),
}

impl Serialize for LimitValueDto {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Unlimited => serializer.serialize_str(UNLIMITED_TOKEN),
            Self::Value(value) => serializer.serialize_i64(*value),
        }
    }
}

impl<'de> Deserialize<'de> for LimitValueDto {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Token(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(value) => Ok(Self::Value(value)),
            Raw::Token(token) if token == UNLIMITED_TOKEN => Ok(Self::Unlimited),
            Raw::Token(token) => Err(D::Error::custom(format!(
                "Unknown limit token '{}'",
                token
            ))),
        }
    }
}
