//! Customer Registry Core - Shared types library.
//!
//! This crate provides common types used across all customer registry components:
//! - `api` - HTTP service exposing customer records
//! - `cli` - Command-line tools for schema setup and sample data
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for the surrogate and business keys

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
