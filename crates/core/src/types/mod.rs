//! Core types for the Almacén inventory console.
//!
//! Value types only: pagination, filter sets, server rows, and stock
//! operations. Wire names follow the backend's camelCase Spanish fields.

pub mod filter;
pub mod movement;
pub mod page;
pub mod product;
pub mod stock;

pub use filter::{ExportFilters, LowStockFilters, MovementFilters, ProductFilters};
pub use movement::Movement;
pub use page::{ALLOWED_PAGE_SIZES, DEFAULT_PAGE_SIZE, DEFAULT_SORT_KEY, PageRequest, PageResult};
pub use product::{NameSuggestion, NamedRef, Product, ProductInput};
pub use stock::{StockMode, StockOperation, StockValueError};
