//! Filter sets for the inventory screens.
//!
//! Each screen keeps two instances of its filter set: a *draft* edited by the
//! form and a *committed* copy used for fetching (see `almacen-screens`).
//! These are plain value structs - `Clone + PartialEq + Default` - so commits
//! are wholesale copies and change detection is structural equality.

use chrono::NaiveDate;

/// Filters for the main product listing.
///
/// `active` is tri-state: `None` means "all", `Some(true)`/`Some(false)`
/// narrow to active/inactive products.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductFilters {
    /// Free-text name search (`nombre`). The one reactive, debounced field.
    pub name: Option<String>,
    /// Exact SKU filter (`sku`).
    pub sku: Option<String>,
    /// Barcode filter (`codigoBarras`).
    pub barcode: Option<String>,
    /// Aroma foreign key (`aromaId`).
    pub aroma_id: Option<i64>,
    /// Family foreign key (`familiaId`).
    pub family_id: Option<i64>,
    /// Tri-state active flag (`activo`).
    pub active: Option<bool>,
}

/// Filters for the low-stock screen: the product filters plus the numeric
/// stock threshold (`umbralMaximo`).
///
/// The out-of-stock screen reuses [`ProductFilters`] directly - its upper
/// bound is fixed at zero server-side and it has no threshold field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LowStockFilters {
    /// Shared product filters.
    pub product: ProductFilters,
    /// Upper stock bound; rows with stock at or below this are returned.
    pub max_threshold: Option<i64>,
}

/// Filters for the movement-history screen.
///
/// Kind, reason, user, and product travel in the POST body; the date range
/// goes in query parameters (`fechaInicio`, `fechaFin`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MovementFilters {
    /// Movement kind (`tipo`), server-defined values.
    pub kind: Option<String>,
    /// Movement reason (`motivo`), server-defined values.
    pub reason: Option<String>,
    /// Acting user (`usuarioId`).
    pub user_id: Option<i64>,
    /// Product the movement touched (`productoId`).
    pub product_id: Option<i64>,
    /// Start of the date range, inclusive.
    pub from: Option<NaiveDate>,
    /// End of the date range, inclusive.
    pub to: Option<NaiveDate>,
}

/// Filters accepted by the CSV export endpoint.
///
/// The export intentionally takes only the select filters; the free-text
/// name/sku/barcode filters from the list view are not part of the export
/// contract.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExportFilters {
    /// Aroma foreign key (`aromaId`).
    pub aroma_id: Option<i64>,
    /// Family foreign key (`familiaId`).
    pub family_id: Option<i64>,
    /// Tri-state active flag (`activo`).
    pub active: Option<bool>,
}

impl From<&ProductFilters> for ExportFilters {
    fn from(filters: &ProductFilters) -> Self {
        Self {
            aroma_id: filters.aroma_id,
            family_id: filters.family_id,
            active: filters.active,
        }
    }
}
