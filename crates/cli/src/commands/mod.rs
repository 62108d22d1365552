//! CLI command implementations.

pub mod check;
pub mod schema;
pub mod seed;

use sqlx::PgPool;
use thiserror::Error;

use customer_registry_api::config::{ConfigError, DatabaseConfig};
use customer_registry_api::db::{self, PoolError, RepositoryError};

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Pool(#[from] PoolError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Load database settings and open a pool.
///
/// # Errors
///
/// Returns `CliError` if settings are missing or the database is unreachable.
pub async fn connect() -> Result<PgPool, CliError> {
    let database = DatabaseConfig::from_env()?;
    tracing::info!("Connecting to database...");
    Ok(db::create_pool(&database).await?)
}
