use sea_orm::DbErr;
use thiserror::Error;

use crate::server::model::section::SectionType;

/// Page-level failures that abort a composition.
///
/// These are terminal for the whole request. Section-level problems never appear here;
/// they are reported as [`SectionFault`] and only remove the affected section.
#[derive(Error, Debug)]
pub enum CompositionError {
    /// No active page exists with the requested slug.
    ///
    /// A normal outcome surfaced as 404, not a server fault.
    #[error("Page '{0}' not found")]
    NotFound(String),

    /// The request named a category sub-identifier that does not exist.
    ///
    /// Checked before any section is loaded. Results in 404.
    #[error("Category '{category}' not found for page '{slug}'")]
    CategoryNotFound {
        /// Slug of the page that was requested
        slug: String,
        /// Category slug that failed to resolve
        category: String,
    },

    /// Storage or connectivity fault while resolving the page or its section list.
    ///
    /// Results in 500 with the error logged server-side.
    #[error(transparent)]
    RepositoryError(#[from] DbErr),
}

/// Per-section failures that remove a single section from the page.
///
/// Caught at the section boundary by the isolation layer and recorded on the render
/// model; never propagated to the page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SectionFault {
    /// The stored type tag is not in the registry.
    #[error("Unknown section type '{0}'")]
    UnknownSectionType(String),

    /// The section references a payload row that no longer exists.
    #[error("Missing {section_type} payload with id {payload_id}")]
    MissingPayload {
        section_type: SectionType,
        payload_id: i32,
    },

    /// The adapter failed while loading or shaping its payload.
    ///
    /// Covers repository errors inside the adapter, malformed stored data and panics.
    #[error("Adapter fault: {0}")]
    AdapterFault(String),
}

impl From<DbErr> for SectionFault {
    fn from(err: DbErr) -> Self {
        SectionFault::AdapterFault(err.to_string())
    }
}
