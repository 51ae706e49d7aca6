//! CSV export helper.

use chrono::NaiveDate;

use almacen_client::export_filename;
use almacen_core::{ExportFilters, ProductFilters};

use crate::gateway::ExportGateway;

/// Download the inventory CSV for the current list filters.
///
/// The list's free-text filters (name/sku/barcode) are not part of the
/// export contract and are dropped when narrowing to [`ExportFilters`].
/// Returns the client-side filename (`inventario_<date>.csv`) and the raw
/// bytes for the caller to save.
///
/// # Errors
///
/// Returns the gateway's user-facing message when the download fails.
pub async fn download_export<G: ExportGateway>(
    gateway: &G,
    filters: &ProductFilters,
    date: NaiveDate,
) -> Result<(String, Vec<u8>), String> {
    let export_filters = ExportFilters::from(filters);
    let bytes = gateway
        .export_csv(&export_filters)
        .await
        .map_err(|e| e.user_message())?;

    Ok((export_filename(date), bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use almacen_client::ApiError;

    #[derive(Default)]
    struct StubExport {
        calls: Mutex<Vec<ExportFilters>>,
    }

    impl ExportGateway for StubExport {
        async fn export_csv(&self, filters: &ExportFilters) -> Result<Vec<u8>, ApiError> {
            self.calls.lock().expect("lock").push(filters.clone());
            Ok(b"id,nombre,stock\n".to_vec())
        }
    }

    #[tokio::test]
    async fn test_export_narrows_filters_and_names_file() {
        let stub = StubExport::default();
        let filters = ProductFilters {
            name: Some("lavanda".to_string()),
            sku: Some("LAV-001".to_string()),
            barcode: None,
            aroma_id: Some(4),
            family_id: None,
            active: Some(true),
        };
        let date = NaiveDate::from_ymd_opt(2026, 8, 26).expect("valid date");

        let (filename, bytes) = download_export(&stub, &filters, date)
            .await
            .expect("export succeeds");

        assert_eq!(filename, "inventario_2026-08-26.csv");
        assert!(!bytes.is_empty());

        let calls = stub.calls.lock().expect("lock");
        let sent = calls.first().expect("call");
        // Only the select filters survive the narrowing.
        assert_eq!(sent.aroma_id, Some(4));
        assert_eq!(sent.active, Some(true));
        assert_eq!(sent.family_id, None);
    }
}
