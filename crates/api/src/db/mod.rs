//! Database operations for the customer registry `PostgreSQL` database.
//!
//! ## Tables
//!
//! - `customers` - Customer records keyed by a UUID `internal_id`
//! - `items` - Sellable items keyed by `item_id`
//! - `purchases` - One row per purchase, referencing `customers.internal_id`
//! - `purchase_details` - Line items keyed by (`purchase_id`, `item_id`)
//!
//! # Schema
//!
//! Tables are created and dropped by the [`schema`] module, usually through:
//! ```bash
//! cargo run -p customer-registry-cli -- db reset
//! ```

pub mod customers;
pub mod purchases;
pub mod schema;
pub mod seed;

use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use crate::config::{ConfigError, DatabaseConfig};

pub use customers::CustomerRepository;
pub use seed::{SeedReport, seed_sample_data};

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., duplicate `customer_id`).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

impl RepositoryError {
    /// Classify a write error, turning unique violations into `Conflict`.
    pub(crate) fn from_write(err: sqlx::Error, conflict: &str) -> Self {
        if let sqlx::Error::Database(ref db_err) = err
            && db_err.is_unique_violation()
        {
            return Self::Conflict(conflict.to_owned());
        }
        Self::Database(err)
    }
}

/// Errors creating the connection pool.
#[derive(Debug, Error)]
pub enum PoolError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("database connection failed: {0}")]
    Connect(#[from] sqlx::Error),
}

fn pool_options() -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .max_lifetime(Duration::from_secs(3600))
        .test_before_acquire(true)
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// Connections are pinged before being handed out and recycled after an hour.
///
/// # Errors
///
/// Returns `PoolError` if the settings are invalid or the connection cannot be
/// established.
pub async fn create_pool(database: &DatabaseConfig) -> Result<PgPool, PoolError> {
    let options = database.connect_options()?;
    Ok(pool_options().connect_with(options).await?)
}

/// Create a pool that does not connect until first use.
///
/// # Errors
///
/// Returns `PoolError::Config` if the settings are invalid.
pub fn create_lazy_pool(database: &DatabaseConfig) -> Result<PgPool, PoolError> {
    let options = database.connect_options()?;
    Ok(pool_options().min_connections(0).connect_lazy_with(options))
}
