use std::sync::Arc;

use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    service::composition::registry::SectionRegistry,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the section registry with every built-in adapter.
pub fn build_registry() -> Arc<SectionRegistry> {
    let registry = SectionRegistry::standard();

    tracing::info!("Registered {} section adapters", registry.len());

    Arc::new(registry)
}

/// Builds the CORS layer.
///
/// Restricts requests to the configured origin when one is set, otherwise allows any
/// origin. Only read and admin update methods are allowed.
///
/// # Arguments
/// - `config` - Application configuration containing the optional allowed origin
///
/// # Returns
/// - `Ok(CorsLayer)` - Configured CORS layer
/// - `Err(AppError::ConfigErr)` - Configured origin is not a valid header value
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    use axum::http::Method;

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::PUT])
        .allow_headers(Any);

    let layer = match &config.cors_allowed_origin {
        Some(origin) => {
            let origin = HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidEnvVar {
                var: "CORS_ALLOWED_ORIGIN".to_string(),
                value: origin.clone(),
            })?;
            layer.allow_origin(origin)
        }
        None => layer.allow_origin(Any),
    };

    Ok(layer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(origin: Option<&str>) -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            bind_address: "127.0.0.1:8080".parse().unwrap(),
            cors_allowed_origin: origin.map(str::to_string),
        }
    }

    #[test]
    fn accepts_configured_origin() {
        assert!(cors_layer(&config(Some("https://example.com"))).is_ok());
        assert!(cors_layer(&config(None)).is_ok());
    }

    #[test]
    fn rejects_invalid_origin() {
        let result = cors_layer(&config(Some("bad\norigin")));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { .. }))
        ));
    }

    #[test]
    fn standard_registry_has_every_adapter() {
        assert_eq!(build_registry().len(), 6);
    }
}
