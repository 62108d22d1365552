//! Core types for the customer registry.
//!
//! This module provides type-safe wrappers for the keys that identify rows.

pub mod id;
pub mod key;

pub use id::*;
pub use key::{CustomerId, ItemId};
