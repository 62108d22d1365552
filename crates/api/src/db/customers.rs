//! Customer repository for database operations.
//!
//! Every write runs in its own transaction. The transaction is committed on
//! success; returning early with an error drops it, which rolls it back.

use sqlx::{PgConnection, PgPool};

use customer_registry_core::{CustomerId, InternalId};

use super::RepositoryError;
use crate::models::{Customer, CustomerFields, CustomerRow};

const DUPLICATE_CUSTOMER_ID: &str = "customer_id already exists";

/// Repository for customer database operations.
pub struct CustomerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CustomerRepository<'a> {
    /// Create a new customer repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new customer with a freshly generated `internal_id`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the `customer_id` already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, fields: &CustomerFields) -> Result<Customer, RepositoryError> {
        let internal_id = InternalId::generate();
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, CustomerRow>(
            r"
            INSERT INTO customers (internal_id, customer_id, customer_name, age, gender)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING internal_id, customer_id, customer_name, age, gender
            ",
        )
        .bind(internal_id)
        .bind(&fields.customer_id)
        .bind(&fields.customer_name)
        .bind(fields.age)
        .bind(fields.gender.as_deref())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| RepositoryError::from_write(e, DUPLICATE_CUSTOMER_ID))?;

        tx.commit().await?;

        tracing::info!(%internal_id, customer_id = %fields.customer_id, "customer created");
        Ok(row.into())
    }

    /// Get a customer by its internal ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_internal_id(
        &self,
        internal_id: InternalId,
    ) -> Result<Option<Customer>, RepositoryError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r"
            SELECT internal_id, customer_id, customer_name, age, gender
            FROM customers
            WHERE internal_id = $1
            ",
        )
        .bind(internal_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Customer::from))
    }

    /// List every customer, ordered by `customer_id`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Customer>, RepositoryError> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            r"
            SELECT internal_id, customer_id, customer_name, age, gender
            FROM customers
            ORDER BY customer_id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    /// List at most `limit` customers, ordered by `customer_id`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_limited(&self, limit: i64) -> Result<Vec<Customer>, RepositoryError> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            r"
            SELECT internal_id, customer_id, customer_name, age, gender
            FROM customers
            ORDER BY customer_id
            LIMIT $1
            ",
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    /// Overwrite every field of an existing customer.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no customer has this internal ID.
    /// Returns `RepositoryError::Conflict` if the new `customer_id` belongs to another customer.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        internal_id: InternalId,
        fields: &CustomerFields,
    ) -> Result<Customer, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, CustomerRow>(
            r"
            UPDATE customers
            SET customer_id = $2, customer_name = $3, age = $4, gender = $5
            WHERE internal_id = $1
            RETURNING internal_id, customer_id, customer_name, age, gender
            ",
        )
        .bind(internal_id)
        .bind(&fields.customer_id)
        .bind(&fields.customer_name)
        .bind(fields.age)
        .bind(fields.gender.as_deref())
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| RepositoryError::from_write(e, DUPLICATE_CUSTOMER_ID))?
        .ok_or(RepositoryError::NotFound)?;

        tx.commit().await?;

        tracing::info!(%internal_id, "customer updated");
        Ok(row.into())
    }

    /// Delete a customer.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no customer has this internal ID.
    /// Returns `RepositoryError::Database` for other database errors (including
    /// a customer still referenced by purchases).
    pub async fn delete(&self, internal_id: InternalId) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r"
            DELETE FROM customers
            WHERE internal_id = $1
            ",
        )
        .bind(internal_id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        tx.commit().await?;

        tracing::info!(%internal_id, "customer deleted");
        Ok(())
    }
}

/// Insert a customer unless one with the same `customer_id` exists.
///
/// Returns the inserted customer, or `None` if the business key was taken.
/// Runs on the caller's connection so it can share a transaction.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the insert fails.
pub async fn insert_if_absent(
    conn: &mut PgConnection,
    fields: &CustomerFields,
) -> Result<Option<Customer>, RepositoryError> {
    let row = sqlx::query_as::<_, CustomerRow>(
        r"
        INSERT INTO customers (internal_id, customer_id, customer_name, age, gender)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (customer_id) DO NOTHING
        RETURNING internal_id, customer_id, customer_name, age, gender
        ",
    )
    .bind(InternalId::generate())
    .bind(&fields.customer_id)
    .bind(&fields.customer_name)
    .bind(fields.age)
    .bind(fields.gender.as_deref())
    .fetch_optional(conn)
    .await?;

    Ok(row.map(Customer::from))
}

/// Get a customer by business key on the caller's connection.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn find_by_customer_id(
    conn: &mut PgConnection,
    customer_id: &CustomerId,
) -> Result<Option<Customer>, RepositoryError> {
    let row = sqlx::query_as::<_, CustomerRow>(
        r"
        SELECT internal_id, customer_id, customer_name, age, gender
        FROM customers
        WHERE customer_id = $1
        ",
    )
    .bind(customer_id)
    .fetch_optional(conn)
    .await?;

    Ok(row.map(Customer::from))
}
