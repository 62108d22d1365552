//! Seed the database with sample customers, items and purchases.

use sqlx::PgPool;
use tracing::info;

use customer_registry_api::db::{CustomerRepository, seed_sample_data};

use super::CliError;

/// How many customers to print after seeding.
const PREVIEW_LIMIT: i64 = 5;

/// Insert sample data and log a short preview of the customers table.
///
/// # Errors
///
/// Returns `CliError::Repository` if seeding fails; nothing is written in that case.
pub async fn sample_data(pool: &PgPool) -> Result<(), CliError> {
    info!("Inserting sample data...");
    let report = seed_sample_data(pool).await?;

    info!("Seeding complete!");
    info!(
        "  Customers: {} inserted, {} skipped",
        report.customers_inserted, report.customers_skipped
    );
    info!(
        "  Items: {} inserted, {} skipped",
        report.items_inserted, report.items_skipped
    );
    info!(
        "  Purchases: {} inserted ({} lines)",
        report.purchases_inserted, report.details_inserted
    );

    let customers = CustomerRepository::new(pool)
        .list_limited(PREVIEW_LIMIT)
        .await?;
    for customer in customers {
        info!(
            "  {} {} {}",
            customer.internal_id, customer.customer_id, customer.customer_name
        );
    }

    Ok(())
}
