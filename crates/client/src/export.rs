//! CSV export.

use chrono::NaiveDate;
use tracing::instrument;

use almacen_core::ExportFilters;

use crate::client::InventoryClient;
use crate::error::ApiError;

impl InventoryClient {
    /// Download the inventory CSV for the given filters.
    ///
    /// The export endpoint only accepts the select filters (aroma, family,
    /// active); the list view's free-text filters are not part of its
    /// contract. Returns the raw CSV bytes for the caller to save.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self, filters))]
    pub async fn export_csv(&self, filters: &ExportFilters) -> Result<Vec<u8>, ApiError> {
        let mut query: Vec<(&'static str, String)> = Vec::new();

        if let Some(aroma_id) = filters.aroma_id {
            query.push(("aromaId", aroma_id.to_string()));
        }
        if let Some(family_id) = filters.family_id {
            query.push(("familiaId", family_id.to_string()));
        }
        if let Some(active) = filters.active {
            query.push(("activo", active.to_string()));
        }

        self.get_bytes("/api/productos/exportar-csv", &query).await
    }
}

/// The client-side filename for an export taken on `date`:
/// `inventario_<ISO-date>.csv`.
#[must_use]
pub fn export_filename(date: NaiveDate) -> String {
    format!("inventario_{}.csv", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_filename() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 26).expect("valid date");
        assert_eq!(export_filename(date), "inventario_2026-08-26.csv");
    }
}
