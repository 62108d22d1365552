//! Customer domain types.
//!
//! These types represent validated domain objects separate from database row types.

use uuid::Uuid;

use customer_registry_core::{CustomerId, InternalId};

/// A customer record (domain type).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    /// Surrogate primary key, generated on creation.
    pub internal_id: InternalId,
    /// Caller-supplied business identifier, unique across customers.
    pub customer_id: CustomerId,
    /// Display name.
    pub customer_name: String,
    /// Age in years, if known.
    pub age: Option<i32>,
    /// Free-form gender label, if known.
    pub gender: Option<String>,
}

/// Every writable field of a customer.
///
/// Used for both inserts and full-field updates; `internal_id` is never part of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerFields {
    pub customer_id: CustomerId,
    pub customer_name: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
}

/// Raw `customers` row as returned by `PostgreSQL`.
#[derive(Debug, sqlx::FromRow)]
pub struct CustomerRow {
    pub internal_id: Uuid,
    pub customer_id: String,
    pub customer_name: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Self {
            internal_id: InternalId::from_uuid(row.internal_id),
            customer_id: CustomerId::new(row.customer_id),
            customer_name: row.customer_name,
            age: row.age,
            gender: row.gender,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_maps_every_column() {
        let uuid = Uuid::new_v4();
        let customer = Customer::from(CustomerRow {
            internal_id: uuid,
            customer_id: "C0001".to_string(),
            customer_name: "山田 太郎".to_string(),
            age: None,
            gender: Some("男性".to_string()),
        });

        assert_eq!(customer.internal_id.as_uuid(), &uuid);
        assert_eq!(customer.customer_id.as_str(), "C0001");
        assert_eq!(customer.customer_name, "山田 太郎");
        assert_eq!(customer.age, None);
        assert_eq!(customer.gender.as_deref(), Some("男性"));
    }
}
