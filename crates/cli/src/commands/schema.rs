//! Table creation commands.

use sqlx::PgPool;

use customer_registry_api::db::schema;

use super::CliError;

/// Create all tables.
///
/// # Errors
///
/// Returns `CliError::Repository` if the DDL fails.
pub async fn create(pool: &PgPool) -> Result<(), CliError> {
    schema::create_all(pool).await?;
    let tables = schema::existing_tables(pool).await?;
    tracing::info!(tables = ?tables, "Tables created");
    Ok(())
}

/// Drop all tables.
///
/// # Errors
///
/// Returns `CliError::Repository` if the DDL fails.
pub async fn drop_all(pool: &PgPool) -> Result<(), CliError> {
    schema::drop_all(pool).await?;
    tracing::info!("All tables dropped (or did not exist)");
    Ok(())
}
