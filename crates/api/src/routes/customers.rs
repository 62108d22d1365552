//! Customer resource handlers.
//!
//! Customers are addressed by their `internal_id` (UUID). The business key
//! `customer_id` is an ordinary, unique, writable field.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use customer_registry_core::{CustomerId, InternalId};

use crate::db::{CustomerRepository, RepositoryError};
use crate::error::{AppError, Result};
use crate::models::{Customer, CustomerFields};
use crate::state::AppState;

/// Request body shared by create and update.
///
/// All four fields are required; update always replaces every field.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerPayload {
    pub customer_id: String,
    pub customer_name: String,
    pub age: i32,
    pub gender: String,
}

/// Body of `POST /customers`.
pub type CustomerCreate = CustomerPayload;

/// Body of `PUT /customers/{internal_id}`.
pub type CustomerUpdate = CustomerPayload;

impl From<CustomerPayload> for CustomerFields {
    fn from(payload: CustomerPayload) -> Self {
        Self {
            customer_id: CustomerId::new(payload.customer_id),
            customer_name: payload.customer_name,
            age: Some(payload.age),
            gender: Some(payload.gender),
        }
    }
}

/// A stored customer as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerResponse {
    /// Hyphenated UUID string.
    pub internal_id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            internal_id: customer.internal_id.to_string(),
            customer_id: customer.customer_id.into_inner(),
            customer_name: customer.customer_name,
            age: customer.age,
            gender: customer.gender,
        }
    }
}

const NOT_FOUND: &str = "Customer not found";
const CREATE_FAILED: &str = "Failed to create customer";
const UPDATE_FAILED: &str = "Customer not found or failed to update";

fn customer_error(err: RepositoryError) -> AppError {
    match err {
        RepositoryError::NotFound => AppError::NotFound(NOT_FOUND.to_string()),
        other => other.into(),
    }
}

/// Every create failure, a taken `customer_id` included, is a 500.
fn create_error(err: RepositoryError) -> AppError {
    AppError::WriteFailed {
        detail: CREATE_FAILED,
        source: err,
    }
}

/// A missing row and a taken `customer_id` both read as "not found or failed".
fn update_error(err: RepositoryError) -> AppError {
    match err {
        RepositoryError::NotFound => AppError::NotFound(UPDATE_FAILED.to_string()),
        RepositoryError::Conflict(reason) => {
            tracing::warn!(%reason, "customer update rolled back");
            AppError::NotFound(UPDATE_FAILED.to_string())
        }
        other => other.into(),
    }
}

/// Create a customer.
///
/// POST /customers
///
/// # Errors
///
/// Returns 500 "Failed to create customer" if the insert fails, including
/// when the `customer_id` is taken.
#[instrument(skip_all, fields(customer_id = %payload.customer_id))]
pub async fn create_customer(
    State(state): State<AppState>,
    Json(payload): Json<CustomerCreate>,
) -> Result<Json<CustomerResponse>> {
    let fields = CustomerFields::from(payload);
    let customer = CustomerRepository::new(state.pool())
        .create(&fields)
        .await
        .map_err(create_error)?;

    Ok(Json(customer.into()))
}

/// Fetch one customer.
///
/// GET /customers/{internal_id}
///
/// # Errors
///
/// Returns 404 if no customer has this ID.
#[instrument(skip_all, fields(internal_id = %internal_id))]
pub async fn read_one_customer(
    State(state): State<AppState>,
    Path(internal_id): Path<InternalId>,
) -> Result<Json<CustomerResponse>> {
    let customer = CustomerRepository::new(state.pool())
        .get_by_internal_id(internal_id)
        .await
        .map_err(customer_error)?
        .ok_or_else(|| customer_error(RepositoryError::NotFound))?;

    Ok(Json(customer.into()))
}

/// List every customer.
///
/// GET /allcustomers
///
/// # Errors
///
/// Returns 500 if the query fails. An empty table is an empty list.
#[instrument(skip_all)]
pub async fn read_all_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerResponse>>> {
    let customers = CustomerRepository::new(state.pool())
        .list()
        .await
        .map_err(customer_error)?;

    Ok(Json(
        customers.into_iter().map(CustomerResponse::from).collect(),
    ))
}

/// Replace every field of a customer.
///
/// PUT /customers/{internal_id}
///
/// # Errors
///
/// Returns 404 if no customer has this ID or the new `customer_id` belongs to
/// another customer, 500 for any other failure.
#[instrument(skip_all, fields(internal_id = %internal_id))]
pub async fn update_customer(
    State(state): State<AppState>,
    Path(internal_id): Path<InternalId>,
    Json(payload): Json<CustomerUpdate>,
) -> Result<Json<CustomerResponse>> {
    let fields = CustomerFields::from(payload);
    let customer = CustomerRepository::new(state.pool())
        .update(internal_id, &fields)
        .await
        .map_err(update_error)?;

    Ok(Json(customer.into()))
}

/// Delete a customer.
///
/// DELETE /customers/{internal_id}
///
/// # Errors
///
/// Returns 404 if no customer has this ID.
#[instrument(skip_all, fields(internal_id = %internal_id))]
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(internal_id): Path<InternalId>,
) -> Result<StatusCode> {
    CustomerRepository::new(state.pool())
        .delete(internal_id)
        .await
        .map_err(customer_error)?;

    Ok(StatusCode::NO_CONTENT)
}
