//! Page composition pipeline.
//!
//! Composition runs in four stages:
//!
//! 1. **Resolve** (`resolver`) - slug to active page, or `NotFound`
//! 2. **Load** (`loader`) - page to ordered, visible section references
//! 3. **Isolate** (`isolation`) - each reference through its registered adapter
//!    (`registry`, `adapter/`), concurrently, with failures contained per section
//! 4. **Compose** (`compositor`) - fold outcomes into a render model in loader order
//!
//! Page-level failures abort with a [`CompositionError`]. Section-level failures only
//! remove the affected section and are listed on the render model.

pub mod adapter;
pub mod compositor;
pub mod isolation;
pub mod loader;
pub mod registry;
pub mod resolver;

use futures::future::join_all;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::faq::FaqCategoryRepository,
    error::composition::CompositionError,
    model::render::PageRenderModel,
    service::composition::{
        adapter::{RenderScope, SectionContext},
        compositor::Compositor,
        loader::SectionLoader,
        registry::SectionRegistry,
        resolver::PageResolver,
    },
};

pub struct PageCompositionService<'a> {
    db: &'a DatabaseConnection,
    registry: &'a SectionRegistry,
}

impl<'a> PageCompositionService<'a> {
    pub fn new(db: &'a DatabaseConnection, registry: &'a SectionRegistry) -> Self {
        Self { db, registry }
    }

    /// Composes the render model for a page.
    ///
    /// Resolves the page, checks the category scope if one is given, loads the visible
    /// sections and hydrates them all concurrently. Results are collected in loader order
    /// regardless of completion order. Nothing is written.
    ///
    /// # Arguments
    /// - `slug` - URL slug of the page
    /// - `scope` - Request scope, e.g. an FAQ category to narrow to
    ///
    /// # Returns
    /// - `Ok(PageRenderModel)` - Composed page; may have no sections
    /// - `Err(CompositionError::NotFound)` - No active page with that slug
    /// - `Err(CompositionError::CategoryNotFound)` - Scoped category does not exist
    /// - `Err(CompositionError::RepositoryError)` - Database error before section work
    pub async fn compose(
        &self,
        slug: &str,
        scope: RenderScope,
    ) -> Result<PageRenderModel, CompositionError> {
        let page = PageResolver::new(self.db).resolve(slug).await?;

        if let Some(category) = scope.category.as_deref() {
            if !FaqCategoryRepository::new(self.db)
                .exists_by_slug(category)
                .await?
            {
                return Err(CompositionError::CategoryNotFound {
                    slug: slug.to_string(),
                    category: category.to_string(),
                });
            }
        }

        let sections = SectionLoader::new(self.db).load(&page).await?;

        let ctx = SectionContext {
            db: self.db,
            scope: &scope,
        };
        let outcomes = join_all(
            sections
                .into_iter()
                .map(|section| isolation::isolate(self.registry, &ctx, section)),
        )
        .await;

        let model = Compositor::compose(page, outcomes);

        if !model.omitted.is_empty() {
            tracing::info!(
                "Composed page '{}' with {} sections, {} omitted",
                slug,
                model.sections.len(),
                model.omitted.len()
            );
        }

        Ok(model)
    }
}
