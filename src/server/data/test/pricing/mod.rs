use crate::server::{
    data::pricing::{BillingCycleRepository, PlanRepository, PricingSectionRepository},
    model::pricing::{FeatureSource, LimitValue},
};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory, factory::pricing::PlanFactory, log::LogCapture};

mod get_by_id;
mod set_default;
mod set_popular;
