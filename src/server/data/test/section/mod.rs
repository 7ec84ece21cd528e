use crate::server::data::section::SectionRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::page_section::PageSectionFactory};

mod get_visible_by_page_id;
