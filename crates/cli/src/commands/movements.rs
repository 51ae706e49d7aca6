//! Movement-history command.

use almacen_core::{MovementFilters, PageRequest};
use almacen_screens::{FetchOutcome, MovementScreen};

use super::CliError;

/// List inventory movements for the given page and filters.
#[allow(clippy::print_stdout)]
pub async fn list(req: PageRequest, filters: MovementFilters) -> Result<(), CliError> {
    let client = super::client()?;

    let mut screen = MovementScreen::new();
    *screen.filters.draft_mut() = filters;
    screen.apply_filters();
    screen.page.request = req;

    if let FetchOutcome::Failed(message) = screen.refresh(&client).await {
        return Err(CliError::Flow(message));
    }

    let page = &screen.page.result;
    if page.is_empty() {
        println!("No movements found");
        return Ok(());
    }

    println!(
        "{:>6}  {:<19} {:<10} {:<16} {:>7}  {:<24} {}",
        "ID", "Date", "Kind", "Reason", "Qty", "Product", "User"
    );
    for movement in &page.content {
        let product = movement
            .product_name
            .clone()
            .unwrap_or_else(|| format!("#{}", movement.product_id));
        let user = movement
            .user_name
            .clone()
            .unwrap_or_else(|| format!("#{}", movement.user_id));
        println!(
            "{:>6}  {:<19} {:<10} {:<16} {:>7}  {:<24} {user}",
            movement.id,
            movement.date.format("%Y-%m-%d %H:%M:%S"),
            movement.kind,
            movement.reason,
            movement.quantity,
            product,
        );
    }
    println!(
        "page {} of {} ({} movements)",
        page.page_number + 1,
        page.total_pages,
        page.total_elements
    );
    Ok(())
}
