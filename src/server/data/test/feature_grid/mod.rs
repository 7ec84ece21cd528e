use crate::server::data::feature_grid::FeatureGridRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_id;
