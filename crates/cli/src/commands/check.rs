//! Database connection check.

use sqlx::PgPool;

use customer_registry_api::db::RepositoryError;

use super::CliError;

/// Run a trivial query and report the server version.
///
/// # Errors
///
/// Returns `CliError::Repository` if the query fails.
pub async fn connection(pool: &PgPool) -> Result<(), CliError> {
    let version: String = sqlx::query_scalar("SELECT version()")
        .fetch_one(pool)
        .await
        .map_err(RepositoryError::from)?;

    tracing::info!(%version, "Successfully connected to the database");
    Ok(())
}
