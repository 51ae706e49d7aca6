//! Almacén Core - Shared types library.
//!
//! This crate provides common types used across all Almacén components:
//! - `client` - Typed REST gateway to the inventory backend
//! - `screens` - Screen state management (filters, pagination, stock flow)
//! - `cli` - Command-line console driving the screens
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Page requests/results, filter sets, rows, stock operations

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
