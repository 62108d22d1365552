//! Item and purchase types.
//!
//! These tables have no HTTP surface; rows are written by the sample-data seed.

use chrono::{DateTime, Utc};

use customer_registry_core::{InternalId, ItemId, PurchaseId};

/// A sellable item.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Item {
    pub item_id: ItemId,
    /// Unique across items.
    pub item_name: String,
    /// Unit price in the smallest currency unit.
    pub price: i32,
}

/// A purchase made by a customer.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Purchase {
    pub purchase_id: PurchaseId,
    pub customer_internal_id: InternalId,
    pub purchase_date: DateTime<Utc>,
}

/// One line of a purchase.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct PurchaseDetail {
    pub purchase_id: PurchaseId,
    pub item_id: ItemId,
    pub quantity: i32,
}
