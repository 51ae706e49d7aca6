//! Integration tests for the inventory flows.
//!
//! These tests require a running inventory backend with seed data:
//! - `ALMACEN_API_URL` pointing at it (default `http://localhost:8080`)
//! - At least one product with a known id (`TEST_PRODUCT_ID`, default 1)
//!
//! Run with: `cargo test -p almacen-integration-tests -- --ignored`

use almacen_core::{LowStockFilters, PageRequest, ProductFilters};
use almacen_integration_tests::test_client;
use almacen_screens::{LowStockScreen, ProductListScreen};

fn test_product_id() -> i64 {
    std::env::var("TEST_PRODUCT_ID")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(1)
}

fn test_user_id() -> i64 {
    std::env::var("TEST_USER_ID")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(1)
}

// ============================================================================
// Paged listing
// ============================================================================

#[tokio::test]
#[ignore = "Requires running inventory backend"]
async fn test_product_list_first_page() {
    let client = test_client();

    let mut screen = ProductListScreen::new();
    screen.refresh(&client).await;

    assert!(screen.last_error.is_none(), "{:?}", screen.last_error);
    assert!(!screen.page.loading);
    assert!(screen.page.result.content.len() as u64 <= u64::from(screen.page.result.page_size));
}

#[tokio::test]
#[ignore = "Requires running inventory backend"]
async fn test_name_filter_narrows_results() {
    let client = test_client();

    let page = client
        .product_page(&PageRequest::default(), &ProductFilters::default())
        .await
        .expect("unfiltered page");
    let Some(first) = page.content.first() else {
        return; // empty catalog, nothing to assert against
    };

    let filters = ProductFilters {
        name: Some(first.name.clone()),
        ..ProductFilters::default()
    };
    let filtered = client
        .product_page(&PageRequest::default(), &filters)
        .await
        .expect("filtered page");

    assert!(filtered.total_elements >= 1);
    assert!(filtered.total_elements <= page.total_elements);
}

#[tokio::test]
#[ignore = "Requires running inventory backend"]
async fn test_low_stock_respects_threshold() {
    let client = test_client();

    let mut screen = LowStockScreen::new();
    *screen.filters.draft_mut() = LowStockFilters {
        product: ProductFilters::default(),
        max_threshold: Some(5),
    };
    screen.apply_filters();
    screen.refresh(&client).await;

    assert!(screen.last_error.is_none(), "{:?}", screen.last_error);
    for product in &screen.page.result.content {
        assert!(product.stock <= 5, "{} has stock {}", product.name, product.stock);
    }
}

// ============================================================================
// Stock mutations
// ============================================================================

#[tokio::test]
#[ignore = "Requires running inventory backend (mutates stock)"]
async fn test_stock_set_and_adjust_round_trip() {
    let client = test_client();
    let product_id = test_product_id();
    let user_id = test_user_id();

    let before = client.get_product(product_id).await.expect("product");

    client
        .set_stock(product_id, before.stock + 10, user_id)
        .await
        .expect("set stock");
    let after_set = client.get_product(product_id).await.expect("product");
    assert_eq!(after_set.stock, before.stock + 10);

    client
        .remove_stock(product_id, 10, user_id)
        .await
        .expect("remove stock");
    let restored = client.get_product(product_id).await.expect("product");
    assert_eq!(restored.stock, before.stock);
}

// ============================================================================
// Export
// ============================================================================

#[tokio::test]
#[ignore = "Requires running inventory backend"]
async fn test_export_returns_csv() {
    let client = test_client();

    let bytes = client
        .export_csv(&almacen_core::ExportFilters::default())
        .await
        .expect("export");

    assert!(!bytes.is_empty());
    let head = String::from_utf8_lossy(&bytes);
    assert!(head.lines().next().is_some());
}
