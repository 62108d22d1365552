//! Domain models for the customer registry.

pub mod customer;
pub mod purchase;

pub use customer::{Customer, CustomerFields, CustomerRow};
pub use purchase::{Item, Purchase, PurchaseDetail};
