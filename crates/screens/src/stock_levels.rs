//! Low-stock and out-of-stock screens.
//!
//! Sibling variants of the product listing: same filter and page mechanics,
//! different endpoint. The low-stock screen adds the numeric threshold; the
//! out-of-stock screen has a fixed upper bound of zero server-side and no
//! threshold field.

use almacen_core::{LowStockFilters, Product, ProductFilters};

use crate::filter_state::FilterState;
use crate::gateway::CatalogGateway;
use crate::pager::{FetchOutcome, PageState};

/// State for the low-stock table.
#[derive(Debug, Default)]
pub struct LowStockScreen {
    pub filters: FilterState<LowStockFilters>,
    pub page: PageState<Product>,
    pub last_error: Option<String>,
}

impl LowStockScreen {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the current page for the committed filters and threshold.
    pub async fn refresh<G: CatalogGateway>(&mut self, gateway: &G) -> FetchOutcome {
        let ticket = self.page.begin();
        let result = gateway
            .low_stock_page(&self.page.request, self.filters.committed())
            .await;
        let outcome = self.page.settle(ticket, result);
        outcome.record(&mut self.last_error);
        outcome
    }

    /// Commit the whole filter form (threshold included), back to page 0.
    pub fn apply_filters(&mut self) {
        self.filters.apply();
        self.page.reset_to_first_page();
    }

    /// Reset filters and threshold to defaults, back to page 0.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.page.reset_to_first_page();
    }

    /// Commit a debounced name-search value; see
    /// [`ProductListScreen::commit_name_search`](crate::product_list::ProductListScreen::commit_name_search).
    pub fn commit_name_search(&mut self, value: Option<String>) -> bool {
        if self.filters.committed().product.name == value {
            return false;
        }
        self.filters.commit_field(|f| f.product.name = value.clone());
        self.page.reset_to_first_page();
        true
    }
}

/// State for the out-of-stock table.
#[derive(Debug, Default)]
pub struct OutOfStockScreen {
    pub filters: FilterState<ProductFilters>,
    pub page: PageState<Product>,
    pub last_error: Option<String>,
}

impl OutOfStockScreen {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the current page for the committed filters.
    pub async fn refresh<G: CatalogGateway>(&mut self, gateway: &G) -> FetchOutcome {
        let ticket = self.page.begin();
        let result = gateway
            .out_of_stock_page(&self.page.request, self.filters.committed())
            .await;
        let outcome = self.page.settle(ticket, result);
        outcome.record(&mut self.last_error);
        outcome
    }

    /// Commit the whole filter form, back to page 0.
    pub fn apply_filters(&mut self) {
        self.filters.apply();
        self.page.reset_to_first_page();
    }

    /// Reset filters to defaults, back to page 0.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.page.reset_to_first_page();
    }

    /// Commit a debounced name-search value.
    pub fn commit_name_search(&mut self, value: Option<String>) -> bool {
        if self.filters.committed().name == value {
            return false;
        }
        self.filters.commit_field(|f| f.name = value.clone());
        self.page.reset_to_first_page();
        true
    }
}
