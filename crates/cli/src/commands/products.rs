//! Product listing, search, and toggle commands.

use almacen_core::{LowStockFilters, PageRequest, PageResult, Product, ProductFilters};
use almacen_screens::{
    FetchOutcome, LowStockScreen, OutOfStockScreen, ProductListScreen, toggle_active,
};

use super::CliError;

/// List products for the given page and filters.
pub async fn list(req: PageRequest, filters: ProductFilters) -> Result<(), CliError> {
    let client = super::client()?;

    let mut screen = ProductListScreen::new();
    *screen.filters.draft_mut() = filters;
    screen.apply_filters();
    screen.page.request = req;

    let outcome = screen.refresh(&client).await;
    finish_listing(&outcome, &screen.page.result)
}

/// List low-stock products.
pub async fn low_stock(req: PageRequest, filters: LowStockFilters) -> Result<(), CliError> {
    let client = super::client()?;

    let mut screen = LowStockScreen::new();
    *screen.filters.draft_mut() = filters;
    screen.apply_filters();
    screen.page.request = req;

    let outcome = screen.refresh(&client).await;
    finish_listing(&outcome, &screen.page.result)
}

/// List out-of-stock products.
pub async fn out_of_stock(req: PageRequest, filters: ProductFilters) -> Result<(), CliError> {
    let client = super::client()?;

    let mut screen = OutOfStockScreen::new();
    *screen.filters.draft_mut() = filters;
    screen.apply_filters();
    screen.page.request = req;

    let outcome = screen.refresh(&client).await;
    finish_listing(&outcome, &screen.page.result)
}

/// Name-prefix autocomplete lookup.
#[allow(clippy::print_stdout)]
pub async fn search(partial: &str) -> Result<(), CliError> {
    let client = super::client()?;
    let suggestions = client.suggest_names(partial).await?;

    if suggestions.is_empty() {
        println!("No matches for \"{partial}\"");
        return Ok(());
    }

    for suggestion in suggestions {
        println!("{:>6}  {}", suggestion.id, suggestion.name);
    }
    Ok(())
}

/// Invert a product's active flag.
#[allow(clippy::print_stdout)]
pub async fn toggle(id: i64) -> Result<(), CliError> {
    let client = super::client()?;

    let product = client.get_product(id).await?;
    let new_state = toggle_active(&client, &product)
        .await
        .map_err(CliError::Flow)?;

    println!(
        "{}: {} -> {}",
        product.name,
        state_label(product.active),
        state_label(new_state)
    );
    Ok(())
}

const fn state_label(active: bool) -> &'static str {
    if active { "active" } else { "inactive" }
}

/// Print the listing or fail with the surfaced fetch error.
fn finish_listing(outcome: &FetchOutcome, page: &PageResult<Product>) -> Result<(), CliError> {
    match outcome {
        FetchOutcome::Failed(message) => Err(CliError::Flow(message.clone())),
        FetchOutcome::Applied | FetchOutcome::Stale => {
            print_products(page);
            Ok(())
        }
    }
}

#[allow(clippy::print_stdout)]
fn print_products(page: &PageResult<Product>) {
    if page.is_empty() {
        println!("No products found");
        return;
    }

    println!(
        "{:>6}  {:<32} {:<14} {:>7}  {:<8} {}",
        "ID", "Name", "SKU", "Stock", "State", "Aroma / Family"
    );
    for product in &page.content {
        let aroma = product
            .aroma
            .as_ref()
            .map_or("-", |a| a.name.as_str());
        let family = product
            .family
            .as_ref()
            .map_or("-", |f| f.name.as_str());
        println!(
            "{:>6}  {:<32} {:<14} {:>7}  {:<8} {aroma} / {family}",
            product.id,
            product.name,
            product.sku,
            product.stock,
            state_label(product.active),
        );
    }
    println!(
        "page {} of {} ({} products)",
        page.page_number + 1,
        page.total_pages,
        page.total_elements
    );
}
