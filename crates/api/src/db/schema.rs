//! Table creation and removal.
//!
//! The DDL lives in `crates/api/schema/` and is embedded at compile time.

use sqlx::PgPool;

use super::RepositoryError;

const CREATE_TABLES: &str = include_str!("../../schema/create_tables.sql");
const DROP_TABLES: &str = include_str!("../../schema/drop_tables.sql");

/// Table names in dependency order (referenced tables first).
pub const TABLES: [&str; 4] = ["customers", "items", "purchases", "purchase_details"];

/// Create every table that does not exist yet.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if any statement fails.
pub async fn create_all(pool: &PgPool) -> Result<(), RepositoryError> {
    tracing::info!("creating tables");
    sqlx::raw_sql(CREATE_TABLES).execute(pool).await?;
    Ok(())
}

/// Drop every table, children first.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if any statement fails.
pub async fn drop_all(pool: &PgPool) -> Result<(), RepositoryError> {
    tracing::info!("dropping tables");
    sqlx::raw_sql(DROP_TABLES).execute(pool).await?;
    Ok(())
}

/// Return which of [`TABLES`] currently exist in the connected schema.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the catalog query fails.
pub async fn existing_tables(pool: &PgPool) -> Result<Vec<String>, RepositoryError> {
    let names = sqlx::query_scalar::<_, String>(
        r"
        SELECT table_name::text
        FROM information_schema.tables
        WHERE table_schema = current_schema()
          AND table_name::text = ANY($1)
        ORDER BY table_name
        ",
    )
    .bind(TABLES.as_slice())
    .fetch_all(pool)
    .await?;

    Ok(names)
}
