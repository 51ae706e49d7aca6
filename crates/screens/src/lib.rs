//! Almacén Screens - UI state management for the inventory console.
//!
//! Each inventory screen is a plain struct owning two pieces of state:
//! a [`FilterState`] holding the draft and committed filter sets, and a
//! [`PageState`] holding the page request, the last page result, and the
//! loading flag. Refreshing a screen issues one gateway call and settles
//! the result under a monotonic fetch ticket so a late-arriving stale
//! response can never overwrite a newer one.
//!
//! Gateway access goes through the traits in [`gateway`], implemented for
//! `almacen_client::InventoryClient` and by in-memory stubs in tests.
//!
//! # Modules
//!
//! - [`filter_state`] - Draft/committed filter state with pure commits
//! - [`search`] - Debounced free-text search (300 ms quiet period)
//! - [`pager`] - Page state, fetch tickets, stale-response discard
//! - [`gateway`] - Traits the screens fetch through
//! - [`product_list`], [`stock_levels`], [`movements`] - Screen structs
//! - [`stock_flow`] - Validate/submit flow for stock mutations
//! - [`export`] - CSV export helper

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod export;
pub mod filter_state;
pub mod gateway;
pub mod movements;
pub mod pager;
pub mod product_list;
pub mod search;
pub mod stock_flow;
pub mod stock_levels;

pub use export::download_export;
pub use filter_state::FilterState;
pub use gateway::{CatalogGateway, ExportGateway, MovementGateway, StockGateway};
pub use movements::MovementScreen;
pub use pager::{FetchOutcome, FetchTicket, PageState};
pub use product_list::{ProductListScreen, toggle_active};
pub use search::{DebouncedSearch, SEARCH_QUIET_PERIOD};
pub use stock_flow::{
    StockChangeForm, StockEntryMode, StockFlowError, StockFlowOutcome, submit_stock_change,
};
pub use stock_levels::{LowStockScreen, OutOfStockScreen};
