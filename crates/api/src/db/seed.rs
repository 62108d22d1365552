//! Sample data for local development.
//!
//! Inserts two customers, three items and two purchases. Rows whose key
//! already exists are skipped, and a customer that already has purchases gets
//! no new ones, so seeding twice leaves the data unchanged. Everything runs in
//! a single transaction.

use chrono::{DateTime, TimeZone, Utc};
use sqlx::PgPool;

use customer_registry_core::{CustomerId, ItemId};

use super::{RepositoryError, customers, purchases};
use crate::models::{CustomerFields, Item, PurchaseDetail};

struct SampleCustomer {
    customer_id: &'static str,
    customer_name: &'static str,
    age: i32,
    gender: &'static str,
}

struct SamplePurchase {
    customer_id: &'static str,
    /// (year, month, day, hour, minute)
    at: (i32, u32, u32, u32, u32),
    lines: &'static [(&'static str, i32)],
}

const CUSTOMERS: &[SampleCustomer] = &[
    SampleCustomer {
        customer_id: "C0001",
        customer_name: "山田 太郎",
        age: 35,
        gender: "男性",
    },
    SampleCustomer {
        customer_id: "C0002",
        customer_name: "佐藤 花子",
        age: 28,
        gender: "女性",
    },
];

const ITEMS: &[(&str, &str, i32)] = &[
    ("ITEM001", "高性能ラップトップ", 150_000),
    ("ITEM002", "ワイヤレスマウス", 3_500),
    ("ITEM003", "メカニカルキーボード", 8_000),
];

const PURCHASES: &[SamplePurchase] = &[
    SamplePurchase {
        customer_id: "C0001",
        at: (2023, 10, 26, 10, 30),
        lines: &[("ITEM001", 1), ("ITEM002", 1)],
    },
    SamplePurchase {
        customer_id: "C0002",
        at: (2023, 10, 27, 14, 15),
        lines: &[("ITEM003", 2), ("ITEM002", 1)],
    },
];

/// Counts of what a seed run did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub customers_inserted: usize,
    pub customers_skipped: usize,
    pub items_inserted: usize,
    pub items_skipped: usize,
    pub purchases_inserted: usize,
    pub details_inserted: usize,
}

fn sample_time(
    (year, month, day, hour, minute): (i32, u32, u32, u32, u32),
) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).single()
}

/// Insert the sample rows.
///
/// # Errors
///
/// Returns `RepositoryError` if any statement fails; nothing is committed in
/// that case.
pub async fn seed_sample_data(pool: &PgPool) -> Result<SeedReport, RepositoryError> {
    let mut report = SeedReport::default();
    let mut tx = pool.begin().await?;

    for sample in CUSTOMERS {
        let fields = CustomerFields {
            customer_id: CustomerId::new(sample.customer_id),
            customer_name: sample.customer_name.to_owned(),
            age: Some(sample.age),
            gender: Some(sample.gender.to_owned()),
        };
        if customers::insert_if_absent(&mut tx, &fields).await?.is_some() {
            report.customers_inserted += 1;
        } else {
            tracing::info!(customer_id = sample.customer_id, "customer already exists, skipping");
            report.customers_skipped += 1;
        }
    }

    for &(item_id, item_name, price) in ITEMS {
        let item = Item {
            item_id: ItemId::new(item_id),
            item_name: item_name.to_owned(),
            price,
        };
        if purchases::insert_item_if_absent(&mut tx, &item).await? {
            report.items_inserted += 1;
        } else {
            tracing::info!(item_id, "item already exists, skipping");
            report.items_skipped += 1;
        }
    }

    for sample in PURCHASES {
        let customer_id = CustomerId::new(sample.customer_id);
        let Some(customer) = customers::find_by_customer_id(&mut tx, &customer_id).await? else {
            tracing::warn!(%customer_id, "sample customer missing, skipping purchases");
            continue;
        };

        if !purchases::purchases_for_customer(&mut tx, customer.internal_id)
            .await?
            .is_empty()
        {
            tracing::info!(%customer_id, "customer already has purchases, skipping");
            continue;
        }

        let purchase =
            purchases::create_purchase(&mut tx, customer.internal_id, sample_time(sample.at))
                .await?;
        report.purchases_inserted += 1;

        for &(item_id, quantity) in sample.lines {
            let detail = PurchaseDetail {
                purchase_id: purchase.purchase_id,
                item_id: ItemId::new(item_id),
                quantity,
            };
            purchases::add_purchase_detail(&mut tx, &detail).await?;
            report.details_inserted += 1;
        }
    }

    tx.commit().await?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_times_are_valid() {
        for sample in PURCHASES {
            assert!(sample_time(sample.at).is_some());
        }
        let first = PURCHASES.first().and_then(|p| sample_time(p.at));
        assert_eq!(
            first.map(|t| t.to_rfc3339()),
            Some("2023-10-26T10:30:00+00:00".to_string())
        );
    }

    #[test]
    fn test_purchase_lines_reference_sample_rows() {
        for sample in PURCHASES {
            assert!(CUSTOMERS.iter().any(|c| c.customer_id == sample.customer_id));
            for (item_id, quantity) in sample.lines {
                assert!(ITEMS.iter().any(|(id, _, _)| id == item_id));
                assert!(*quantity > 0);
            }
        }
    }

    #[test]
    fn test_sample_customer_ids_fit_column() {
        // customers.customer_id is VARCHAR(10)
        for sample in CUSTOMERS {
            assert!(sample.customer_id.chars().count() <= 10);
        }
    }
}
