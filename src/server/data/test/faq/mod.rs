use crate::server::data::faq::{FaqCategoryRepository, FaqSectionRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod exists_by_slug;
mod get_by_id;
