//! CSV export command.

use std::path::Path;

use chrono::Local;

use almacen_core::ProductFilters;
use almacen_screens::download_export;

use super::CliError;

/// Download the inventory CSV and save it as `inventario_<date>.csv` in
/// `out_dir`.
#[allow(clippy::print_stdout)]
pub async fn download(filters: &ProductFilters, out_dir: &Path) -> Result<(), CliError> {
    let client = super::client()?;

    let today = Local::now().date_naive();
    let (filename, bytes) = download_export(&client, filters, today)
        .await
        .map_err(CliError::Flow)?;

    let path = out_dir.join(filename);
    tokio::fs::write(&path, bytes).await?;

    println!("saved {}", path.display());
    Ok(())
}
