use crate::server::data::page::PageRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_active_by_slug;
mod get_navigation;
