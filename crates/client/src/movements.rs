//! Movement-history operations.

use serde::Serialize;
use tracing::instrument;

use almacen_core::{Movement, MovementFilters, PageRequest, PageResult};

use crate::client::InventoryClient;
use crate::error::ApiError;
use crate::products::shared_page_query;

/// POST body for the paged movement query. Unset filters are omitted.
#[derive(Debug, Serialize)]
struct MovementQueryBody<'a> {
    #[serde(rename = "tipo", skip_serializing_if = "Option::is_none")]
    kind: Option<&'a str>,
    #[serde(rename = "motivo", skip_serializing_if = "Option::is_none")]
    reason: Option<&'a str>,
    #[serde(rename = "usuarioId", skip_serializing_if = "Option::is_none")]
    user_id: Option<i64>,
    #[serde(rename = "productoId", skip_serializing_if = "Option::is_none")]
    product_id: Option<i64>,
}

impl InventoryClient {
    /// Fetch one page of inventory movements matching the committed filters.
    ///
    /// Kind/reason/user/product travel in the body; pagination and the date
    /// range go in query parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self, filters))]
    pub async fn movement_page(
        &self,
        req: &PageRequest,
        filters: &MovementFilters,
    ) -> Result<PageResult<Movement>, ApiError> {
        let query = movement_query(req, filters);
        let body = MovementQueryBody {
            kind: filters.kind.as_deref(),
            reason: filters.reason.as_deref(),
            user_id: filters.user_id,
            product_id: filters.product_id,
        };

        self.post("/api/movimientos/inventario/filtros/paginas", &query, &body)
            .await
    }
}

/// Pagination plus date-range query parameters.
fn movement_query(req: &PageRequest, filters: &MovementFilters) -> Vec<(&'static str, String)> {
    let mut query = shared_page_query(req);

    if let Some(from) = filters.from {
        query.push(("fechaInicio", from.format("%Y-%m-%d").to_string()));
    }
    if let Some(to) = filters.to {
        query.push(("fechaFin", to.format("%Y-%m-%d").to_string()));
    }

    query
}
