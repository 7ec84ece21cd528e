//! Server-side API backend and page composition logic.
//!
//! This module contains the complete backend: API endpoints, the composition pipeline,
//! data access and infrastructure. The backend uses Axum as the web framework and SeaORM
//! for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Page composition, navigation and content operations
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models for pages, sections and payloads
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, section registry)
//! - **Startup** (`startup`) - Database connection, registry and CORS setup
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** extracts path parameters and calls the service
//! 3. **Service** resolves the page, loads its sections and hydrates them concurrently
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Controller** converts the render model to a DTO and returns it

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
