//! Stock mutation commands.

use almacen_screens::{StockChangeForm, StockEntryMode, StockFlowOutcome, submit_stock_change};

use super::CliError;

/// Set stock to an absolute value.
pub async fn set(product_id: i64, raw_value: &str, user_id: i64) -> Result<(), CliError> {
    submit(StockEntryMode::Set, product_id, raw_value, user_id).await
}

/// Adjust stock by a signed delta.
pub async fn adjust(product_id: i64, raw_delta: &str, user_id: i64) -> Result<(), CliError> {
    submit(StockEntryMode::Adjust, product_id, raw_delta, user_id).await
}

#[allow(clippy::print_stdout)]
async fn submit(
    mode: StockEntryMode,
    product_id: i64,
    raw_value: &str,
    user_id: i64,
) -> Result<(), CliError> {
    let client = super::client()?;

    let product = client.get_product(product_id).await?;
    let form = StockChangeForm {
        mode,
        raw_value,
        product_id,
        previous_stock: product.stock,
        user_id,
    };

    match submit_stock_change(&client, &form).await {
        Ok(StockFlowOutcome::Applied { resulting_stock }) => {
            println!(
                "{}: stock {} -> {resulting_stock}",
                product.name, product.stock
            );

            // The hint above is local; re-fetch for the authoritative value.
            let refreshed = client.get_product(product_id).await?;
            println!("server stock: {}", refreshed.stock);
            Ok(())
        }
        Ok(StockFlowOutcome::NoOp) => {
            println!("{}: zero adjustment, nothing changed", product.name);
            Ok(())
        }
        Err(e) => Err(CliError::Flow(e.to_string())),
    }
}
