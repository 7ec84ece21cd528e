pub use super::billing_cycle::Entity as BillingCycle;
pub use super::faq::Entity as Faq;
pub use super::faq_category::Entity as FaqCategory;
pub use super::faq_section::Entity as FaqSection;
pub use super::feature_grid_item::Entity as FeatureGridItem;
pub use super::feature_grid_section::Entity as FeatureGridSection;
pub use super::feature_limit::Entity as FeatureLimit;
pub use super::form_field::Entity as FormField;
pub use super::form_section::Entity as FormSection;
pub use super::html_section::Entity as HtmlSection;
pub use super::media_feature::Entity as MediaFeature;
pub use super::media_section::Entity as MediaSection;
pub use super::page::Entity as Page;
pub use super::page_section::Entity as PageSection;
pub use super::plan::Entity as Plan;
pub use super::plan_feature::Entity as PlanFeature;
pub use super::plan_pricing::Entity as PlanPricing;
pub use super::pricing_section::Entity as PricingSection;
pub use super::shared_feature::Entity as SharedFeature;
