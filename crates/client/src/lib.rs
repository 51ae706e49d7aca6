//! Almacén Client - Typed REST gateway to the inventory backend.
//!
//! One async method per backend operation: paged product/movement queries,
//! product CRUD, stock mutations, name autocomplete, and CSV export. Each
//! method builds a request from its typed arguments, awaits the call, and
//! returns the decoded payload on 2xx or an [`ApiError`] carrying the
//! server's status and message on failure.
//!
//! Single-shot request/response: no retry, no timeout override, no caching.
//!
//! # Example
//!
//! ```rust,ignore
//! use almacen_client::{ClientConfig, InventoryClient};
//! use almacen_core::{PageRequest, ProductFilters};
//!
//! let config = ClientConfig::from_env()?;
//! let client = InventoryClient::new(&config)?;
//!
//! let page = client
//!     .product_page(&PageRequest::default(), &ProductFilters::default())
//!     .await?;
//!
//! client.set_stock(12, 150, 3).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod client;
mod config;
mod error;
mod export;
mod movements;
mod products;
mod stock;

pub use client::InventoryClient;
pub use config::{ClientConfig, ConfigError};
pub use error::ApiError;
pub use export::export_filename;
