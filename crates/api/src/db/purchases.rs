//! Database operations for items, purchases and purchase details.
//!
//! These functions take a connection rather than the pool so that callers can
//! group several of them in one transaction.

use chrono::{DateTime, Utc};
use sqlx::PgConnection;

use customer_registry_core::{InternalId, ItemId, PurchaseId};

use super::RepositoryError;
use crate::models::{Item, Purchase, PurchaseDetail};

/// Insert an item unless one with the same `item_id` exists.
///
/// Returns `true` if a row was inserted.
///
/// # Errors
///
/// Returns `RepositoryError::Conflict` if another item already uses the name.
/// Returns `RepositoryError::Database` for other database errors.
pub async fn insert_item_if_absent(
    conn: &mut PgConnection,
    item: &Item,
) -> Result<bool, RepositoryError> {
    let result = sqlx::query(
        r"
        INSERT INTO items (item_id, item_name, price)
        VALUES ($1, $2, $3)
        ON CONFLICT (item_id) DO NOTHING
        ",
    )
    .bind(&item.item_id)
    .bind(&item.item_name)
    .bind(item.price)
    .execute(conn)
    .await
    .map_err(|e| RepositoryError::from_write(e, "item_name already exists"))?;

    Ok(result.rows_affected() == 1)
}

/// Get an item by ID.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn get_item(
    conn: &mut PgConnection,
    item_id: &ItemId,
) -> Result<Option<Item>, RepositoryError> {
    let item = sqlx::query_as::<_, Item>(
        r"
        SELECT item_id, item_name, price
        FROM items
        WHERE item_id = $1
        ",
    )
    .bind(item_id)
    .fetch_optional(conn)
    .await?;

    Ok(item)
}

/// Record a purchase for a customer.
///
/// `purchase_date` defaults to the current database time when `None`.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the insert fails (for example when
/// the customer does not exist).
pub async fn create_purchase(
    conn: &mut PgConnection,
    customer_internal_id: InternalId,
    purchase_date: Option<DateTime<Utc>>,
) -> Result<Purchase, RepositoryError> {
    let purchase = sqlx::query_as::<_, Purchase>(
        r"
        INSERT INTO purchases (customer_internal_id, purchase_date)
        VALUES ($1, COALESCE($2, now()))
        RETURNING purchase_id, customer_internal_id, purchase_date
        ",
    )
    .bind(customer_internal_id)
    .bind(purchase_date)
    .fetch_one(conn)
    .await?;

    Ok(purchase)
}

/// Add a line to a purchase.
///
/// # Errors
///
/// Returns `RepositoryError::Conflict` if the purchase already has a line for the item.
/// Returns `RepositoryError::Database` for other database errors.
pub async fn add_purchase_detail(
    conn: &mut PgConnection,
    detail: &PurchaseDetail,
) -> Result<(), RepositoryError> {
    sqlx::query(
        r"
        INSERT INTO purchase_details (purchase_id, item_id, quantity)
        VALUES ($1, $2, $3)
        ",
    )
    .bind(detail.purchase_id)
    .bind(&detail.item_id)
    .bind(detail.quantity)
    .execute(conn)
    .await
    .map_err(|e| RepositoryError::from_write(e, "item already on purchase"))?;

    Ok(())
}

/// List the lines of a purchase, ordered by `item_id`.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn purchase_details(
    conn: &mut PgConnection,
    purchase_id: PurchaseId,
) -> Result<Vec<PurchaseDetail>, RepositoryError> {
    let details = sqlx::query_as::<_, PurchaseDetail>(
        r"
        SELECT purchase_id, item_id, quantity
        FROM purchase_details
        WHERE purchase_id = $1
        ORDER BY item_id
        ",
    )
    .bind(purchase_id)
    .fetch_all(conn)
    .await?;

    Ok(details)
}

/// List a customer's purchases, oldest first.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn purchases_for_customer(
    conn: &mut PgConnection,
    customer_internal_id: InternalId,
) -> Result<Vec<Purchase>, RepositoryError> {
    let purchases = sqlx::query_as::<_, Purchase>(
        r"
        SELECT purchase_id, customer_internal_id, purchase_date
        FROM purchases
        WHERE customer_internal_id = $1
        ORDER BY purchase_date, purchase_id
        ",
    )
    .bind(customer_internal_id)
    .fetch_all(conn)
    .await?;

    Ok(purchases)
}
