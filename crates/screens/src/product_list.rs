//! Main product listing screen.

use almacen_core::{Product, ProductFilters};

use crate::filter_state::FilterState;
use crate::gateway::CatalogGateway;
use crate::pager::{FetchOutcome, PageState};

/// State for the main inventory table: product filters, page state, and the
/// last fetch error (surfaced non-fatally).
#[derive(Debug, Default)]
pub struct ProductListScreen {
    pub filters: FilterState<ProductFilters>,
    pub page: PageState<Product>,
    pub last_error: Option<String>,
}

impl ProductListScreen {
    /// A fresh screen: default filters, first page, nothing loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the current page for the committed filters.
    pub async fn refresh<G: CatalogGateway>(&mut self, gateway: &G) -> FetchOutcome {
        let ticket = self.page.begin();
        let result = gateway
            .product_page(&self.page.request, self.filters.committed())
            .await;
        let outcome = self.page.settle(ticket, result);
        outcome.record(&mut self.last_error);
        outcome
    }

    /// Commit the whole filter form and jump back to the first page.
    /// The caller refreshes afterwards.
    pub fn apply_filters(&mut self) {
        self.filters.apply();
        self.page.reset_to_first_page();
    }

    /// Reset the filter form and committed filters, back to the first page.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.page.reset_to_first_page();
    }

    /// Commit a debounced name-search value.
    ///
    /// Returns `false` - no fetch needed - when the committed name already
    /// equals the new value. Otherwise commits just that field and resets
    /// to the first page.
    pub fn commit_name_search(&mut self, value: Option<String>) -> bool {
        if self.filters.committed().name == value {
            return false;
        }
        self.filters.commit_field(|f| f.name = value.clone());
        self.page.reset_to_first_page();
        true
    }
}

/// Invert a product's active flag on the backend.
///
/// Returns the new state on success and the user-facing message on failure.
///
/// # Errors
///
/// Returns the gateway's user-facing message when the call fails.
pub async fn toggle_active<G: CatalogGateway>(
    gateway: &G,
    product: &Product,
) -> Result<bool, String> {
    let new_state = !product.active;
    gateway
        .set_active(product.id, new_state)
        .await
        .map_err(|e| e.user_message())?;
    Ok(new_state)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use almacen_client::ApiError;
    use almacen_core::{LowStockFilters, PageRequest, PageResult};

    /// Stub catalog recording calls and replaying queued page results.
    #[derive(Default)]
    pub(crate) struct StubCatalog {
        pub pages: Mutex<VecDeque<Result<PageResult<Product>, ApiError>>>,
        pub page_calls: Mutex<Vec<(PageRequest, ProductFilters)>>,
        pub low_stock_calls: Mutex<Vec<(PageRequest, LowStockFilters)>>,
        pub toggles: Mutex<Vec<(i64, bool)>>,
    }

    impl StubCatalog {
        pub fn queue(&self, result: Result<PageResult<Product>, ApiError>) {
            self.pages.lock().expect("lock").push_back(result);
        }

        fn next(&self) -> Result<PageResult<Product>, ApiError> {
            self.pages
                .lock()
                .expect("lock")
                .pop_front()
                .unwrap_or_else(|| Ok(PageResult::empty()))
        }
    }

    impl CatalogGateway for StubCatalog {
        async fn product_page(
            &self,
            req: &PageRequest,
            filters: &ProductFilters,
        ) -> Result<PageResult<Product>, ApiError> {
            self.page_calls
                .lock()
                .expect("lock")
                .push((req.clone(), filters.clone()));
            self.next()
        }

        async fn low_stock_page(
            &self,
            req: &PageRequest,
            filters: &LowStockFilters,
        ) -> Result<PageResult<Product>, ApiError> {
            self.low_stock_calls
                .lock()
                .expect("lock")
                .push((req.clone(), filters.clone()));
            self.next()
        }

        async fn out_of_stock_page(
            &self,
            req: &PageRequest,
            filters: &ProductFilters,
        ) -> Result<PageResult<Product>, ApiError> {
            self.page_calls
                .lock()
                .expect("lock")
                .push((req.clone(), filters.clone()));
            self.next()
        }

        async fn set_active(&self, id: i64, active: bool) -> Result<(), ApiError> {
            self.toggles.lock().expect("lock").push((id, active));
            Ok(())
        }
    }

    pub(crate) fn product(id: i64, name: &str, stock: i64, active: bool) -> Product {
        Product {
            id,
            name: name.to_string(),
            sku: format!("SKU-{id}"),
            barcode: None,
            stock,
            active,
            aroma: None,
            family: None,
            price: None,
        }
    }

    fn page_of(products: Vec<Product>) -> PageResult<Product> {
        let total = products.len() as u64;
        PageResult {
            content: products,
            page_number: 0,
            page_size: 10,
            total_elements: total,
            total_pages: 1,
        }
    }

    #[tokio::test]
    async fn test_refresh_uses_committed_filters_not_draft() {
        let stub = StubCatalog::default();
        stub.queue(Ok(page_of(vec![product(1, "Vela Lavanda", 40, true)])));

        let mut screen = ProductListScreen::new();
        screen.filters.draft_mut().sku = Some("LAV-001".to_string());

        screen.refresh(&stub).await;

        let calls = stub.page_calls.lock().expect("lock");
        assert_eq!(calls.len(), 1);
        // Draft edit was never applied, so the fetch ran without it.
        assert_eq!(calls.first().expect("call").1.sku, None);
    }

    #[tokio::test]
    async fn test_apply_filters_resets_page_and_commits() {
        let stub = StubCatalog::default();
        stub.queue(Ok(page_of(vec![])));

        let mut screen = ProductListScreen::new();
        screen.page.set_page(3);
        screen.filters.draft_mut().active = Some(true);
        screen.apply_filters();

        assert_eq!(screen.page.request.page, 0);

        screen.refresh(&stub).await;
        let calls = stub.page_calls.lock().expect("lock");
        assert_eq!(calls.first().expect("call").1.active, Some(true));
    }

    #[tokio::test]
    async fn test_failed_fetch_empties_table_and_surfaces_error() {
        let stub = StubCatalog::default();
        stub.queue(Err(ApiError::Api {
            status: 500,
            message: "backend down".to_string(),
        }));

        let mut screen = ProductListScreen::new();
        let outcome = screen.refresh(&stub).await;

        assert_eq!(outcome, FetchOutcome::Failed("backend down".to_string()));
        assert!(screen.page.result.content.is_empty());
        assert_eq!(screen.page.result.total_elements, 0);
        assert!(!screen.page.loading);
        assert_eq!(screen.last_error.as_deref(), Some("backend down"));
    }

    #[tokio::test]
    async fn test_commit_name_search_skips_equal_value() {
        let mut screen = ProductListScreen::new();
        screen.page.set_page(2);

        assert!(screen.commit_name_search(Some("lav".to_string())));
        assert_eq!(screen.page.request.page, 0);
        assert_eq!(screen.filters.committed().name.as_deref(), Some("lav"));

        screen.page.set_page(2);
        // Same resolved value: no commit, no page reset, no fetch needed.
        assert!(!screen.commit_name_search(Some("lav".to_string())));
        assert_eq!(screen.page.request.page, 2);
    }

    #[tokio::test]
    async fn test_toggle_active_inverts_prior_state() {
        let stub = StubCatalog::default();

        let active = product(12, "Vela Lavanda", 40, true);
        assert_eq!(toggle_active(&stub, &active).await, Ok(false));

        let inactive = product(13, "Vela Vainilla", 0, false);
        assert_eq!(toggle_active(&stub, &inactive).await, Ok(true));

        let toggles = stub.toggles.lock().expect("lock");
        assert_eq!(*toggles, vec![(12, false), (13, true)]);
    }
}
