//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /                          - Service info
//! GET    /health                    - Liveness check
//! GET    /health/ready              - Readiness check (database ping)
//!
//! # Customers
//! POST   /customers                 - Create a customer
//! GET    /customers/{internal_id}   - Fetch one customer
//! PUT    /customers/{internal_id}   - Replace every field of a customer
//! DELETE /customers/{internal_id}   - Delete a customer (204)
//! GET    /allcustomers              - List every customer
//! ```

pub mod customers;
pub mod health;
pub mod index;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the customer routes router.
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/customers", post(customers::create_customer))
        .route(
            "/customers/{internal_id}",
            get(customers::read_one_customer)
                .put(customers::update_customer)
                .delete(customers::delete_customer),
        )
        .route("/allcustomers", get(customers::read_all_customers))
}

/// Create all routes for the service.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index::index))
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .merge(customer_routes())
}
