//! SS Stores Core - Shared types library.
//!
//! This crate provides common types used across all SS Stores components:
//! - `storefront` - Public REST API serving catalog, cart, and order data
//! - `integration-tests` - End-to-end tests driving the storefront router
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP, no store access.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money serialization,
//!   and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
