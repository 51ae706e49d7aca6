//! Gateway traits the screens fetch through.
//!
//! The screens never talk to `reqwest` directly; they go through these
//! traits so tests can substitute in-memory stubs. `InventoryClient`
//! implements all of them by delegating to its typed REST surface.

use almacen_client::{ApiError, InventoryClient};
use almacen_core::{
    ExportFilters, LowStockFilters, Movement, MovementFilters, PageRequest, PageResult, Product,
    ProductFilters, StockOperation,
};

/// Paged product queries plus the row-level product actions.
// The screens run on a single-threaded UI loop; auto traits on the returned
// futures are not part of the contract.
#[allow(async_fn_in_trait)]
pub trait CatalogGateway {
    /// Fetch one page of products for the committed filters.
    async fn product_page(
        &self,
        req: &PageRequest,
        filters: &ProductFilters,
    ) -> Result<PageResult<Product>, ApiError>;

    /// Fetch one page of low-stock products (threshold included).
    async fn low_stock_page(
        &self,
        req: &PageRequest,
        filters: &LowStockFilters,
    ) -> Result<PageResult<Product>, ApiError>;

    /// Fetch one page of out-of-stock products.
    async fn out_of_stock_page(
        &self,
        req: &PageRequest,
        filters: &ProductFilters,
    ) -> Result<PageResult<Product>, ApiError>;

    /// Set a product's active flag.
    async fn set_active(&self, id: i64, active: bool) -> Result<(), ApiError>;
}

/// Paged movement-history queries.
#[allow(async_fn_in_trait)]
pub trait MovementGateway {
    /// Fetch one page of movements for the committed filters.
    async fn movement_page(
        &self,
        req: &PageRequest,
        filters: &MovementFilters,
    ) -> Result<PageResult<Movement>, ApiError>;
}

/// Stock mutations.
#[allow(async_fn_in_trait)]
pub trait StockGateway {
    /// Submit one stock operation to the endpoint matching its mode.
    async fn apply_stock_operation(&self, op: &StockOperation) -> Result<(), ApiError>;
}

/// CSV export.
#[allow(async_fn_in_trait)]
pub trait ExportGateway {
    /// Download the inventory CSV for the given filters.
    async fn export_csv(&self, filters: &ExportFilters) -> Result<Vec<u8>, ApiError>;
}

impl CatalogGateway for InventoryClient {
    async fn product_page(
        &self,
        req: &PageRequest,
        filters: &ProductFilters,
    ) -> Result<PageResult<Product>, ApiError> {
        Self::product_page(self, req, filters).await
    }

    async fn low_stock_page(
        &self,
        req: &PageRequest,
        filters: &LowStockFilters,
    ) -> Result<PageResult<Product>, ApiError> {
        Self::low_stock_page(self, req, filters).await
    }

    async fn out_of_stock_page(
        &self,
        req: &PageRequest,
        filters: &ProductFilters,
    ) -> Result<PageResult<Product>, ApiError> {
        Self::out_of_stock_page(self, req, filters).await
    }

    async fn set_active(&self, id: i64, active: bool) -> Result<(), ApiError> {
        Self::set_active(self, id, active).await
    }
}

impl MovementGateway for InventoryClient {
    async fn movement_page(
        &self,
        req: &PageRequest,
        filters: &MovementFilters,
    ) -> Result<PageResult<Movement>, ApiError> {
        Self::movement_page(self, req, filters).await
    }
}

impl StockGateway for InventoryClient {
    async fn apply_stock_operation(&self, op: &StockOperation) -> Result<(), ApiError> {
        Self::apply_stock_operation(self, op).await
    }
}

impl ExportGateway for InventoryClient {
    async fn export_csv(&self, filters: &ExportFilters) -> Result<Vec<u8>, ApiError> {
        Self::export_csv(self, filters).await
    }
}
