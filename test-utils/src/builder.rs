use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Page, PageSection};
///
/// let test = TestBuilder::new()
///     .with_table(Page)
///     .with_table(PageSection)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the page and section reference tables.
    pub fn with_page_tables(self) -> Self {
        self.with_table(Page).with_table(PageSection)
    }

    /// Adds every table the pricing payload reads.
    ///
    /// Billing cycles and the shared feature pool come first, then pricing sections,
    /// plans and the per-plan rows.
    pub fn with_pricing_tables(self) -> Self {
        self.with_table(BillingCycle)
            .with_table(SharedFeature)
            .with_table(PricingSection)
            .with_table(Plan)
            .with_table(PlanPricing)
            .with_table(PlanFeature)
            .with_table(FeatureLimit)
    }

    /// Adds the FAQ section, category and question tables.
    pub fn with_faq_tables(self) -> Self {
        self.with_table(FaqSection)
            .with_table(FaqCategory)
            .with_table(Faq)
    }

    /// Adds every table used by page composition.
    ///
    /// Use this when testing the full composition pipeline, where a single page can
    /// reference payloads of any section type.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_content_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_content_tables(self) -> Self {
        self.with_page_tables()
            .with_table(MediaSection)
            .with_table(MediaFeature)
            .with_table(FeatureGridSection)
            .with_table(FeatureGridItem)
            .with_pricing_tables()
            .with_faq_tables()
            .with_table(FormSection)
            .with_table(FormField)
            .with_table(HtmlSection)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
