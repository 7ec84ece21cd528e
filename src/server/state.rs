//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources needed by
//! the request handlers. The state is initialized once during startup and then cloned
//! for each request through Axum's state extraction.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::service::composition::registry::SectionRegistry;

/// Application state containing shared resources.
///
/// Both fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<SectionRegistry>` is a reference-counted pointer to an immutable registry
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Section adapters keyed by section type, built once at startup.
    pub registry: Arc<SectionRegistry>,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `registry` - Section registry shared by every composition
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, registry: Arc<SectionRegistry>) -> Self {
        Self { db, registry }
    }
}
