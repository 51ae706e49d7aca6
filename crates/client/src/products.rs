//! Product operations: paged queries, CRUD, autocomplete, active toggle.

use serde::Serialize;
use tracing::instrument;

use almacen_core::{
    LowStockFilters, NameSuggestion, PageRequest, PageResult, Product, ProductFilters,
    ProductInput,
};

use crate::client::InventoryClient;
use crate::error::ApiError;

/// Body for the `cambiar/estado` toggle.
#[derive(Debug, Serialize)]
struct ChangeStatusBody {
    id: i64,
    #[serde(rename = "activo")]
    active: bool,
}

impl InventoryClient {
    /// Fetch one page of products matching the committed filters.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self, filters))]
    pub async fn product_page(
        &self,
        req: &PageRequest,
        filters: &ProductFilters,
    ) -> Result<PageResult<Product>, ApiError> {
        let query = product_query(req, filters);
        self.get("/api/productos/filtros/paginas", &query).await
    }

    /// Fetch one page of low-stock products.
    ///
    /// Adds the `umbralMaximo` threshold on top of the product filters.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self, filters))]
    pub async fn low_stock_page(
        &self,
        req: &PageRequest,
        filters: &LowStockFilters,
    ) -> Result<PageResult<Product>, ApiError> {
        let mut query = product_query(req, &filters.product);
        if let Some(threshold) = filters.max_threshold {
            query.push(("umbralMaximo", threshold.to_string()));
        }
        self.get("/api/productos/bajo-stock/filtros/paginas", &query)
            .await
    }

    /// Fetch one page of out-of-stock products.
    ///
    /// The upper bound is fixed at zero server-side; there is no threshold
    /// parameter for this variant.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self, filters))]
    pub async fn out_of_stock_page(
        &self,
        req: &PageRequest,
        filters: &ProductFilters,
    ) -> Result<PageResult<Product>, ApiError> {
        let query = product_query(req, filters);
        self.get("/api/productos/fuera-stock/filtros/paginas", &query)
            .await
    }

    /// Look up name-prefix autocomplete candidates.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self))]
    pub async fn suggest_names(&self, partial: &str) -> Result<Vec<NameSuggestion>, ApiError> {
        let path = format!(
            "/api/productos/buscar/nombre/{}/autocomplete",
            urlencoding::encode(partial)
        );
        self.get(&path, &[]).await
    }

    /// Fetch a single product by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the product does not exist.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_product(&self, id: i64) -> Result<Product, ApiError> {
        self.get(&format!("/api/productos/{id}"), &[]).await
    }

    /// Create a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects the input.
    #[instrument(skip(self, input))]
    pub async fn create_product(&self, input: &ProductInput) -> Result<Product, ApiError> {
        self.post("/api/productos", &[], input).await
    }

    /// Update a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects the input.
    #[instrument(skip(self, input), fields(id = %id))]
    pub async fn update_product(&self, id: i64, input: &ProductInput) -> Result<Product, ApiError> {
        self.put(&format!("/api/productos/{id}"), input).await
    }

    /// Toggle a product's active flag to the given state.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self), fields(id = %id, active = %active))]
    pub async fn set_active(&self, id: i64, active: bool) -> Result<(), ApiError> {
        self.put_unit(
            "/api/productos/cambiar/estado",
            &ChangeStatusBody { id, active },
        )
        .await
    }
}

/// Pagination query parameters shared by every paged endpoint.
pub(crate) fn page_query(req: &PageRequest) -> Vec<(&'static str, String)> {
    vec![
        ("page", req.page.to_string()),
        ("size", req.size.to_string()),
        ("sortBy", req.sort_by.clone()),
    ]
}

/// Pagination plus product filter query parameters.
///
/// Unset filters are omitted entirely rather than sent empty.
fn product_query(req: &PageRequest, filters: &ProductFilters) -> Vec<(&'static str, String)> {
    let mut query = page_query(req);

    if let Some(aroma_id) = filters.aroma_id {
        query.push(("aromaId", aroma_id.to_string()));
    }
    if let Some(family_id) = filters.family_id {
        query.push(("familiaId", family_id.to_string()));
    }
    if let Some(active) = filters.active {
        query.push(("activo", active.to_string()));
    }
    if let Some(name) = &filters.name {
        query.push(("nombre", name.clone()));
    }
    if let Some(sku) = &filters.sku {
        query.push(("sku", sku.clone()));
    }
    if let Some(barcode) = &filters.barcode {
        query.push(("codigoBarras", barcode.clone()));
    }

    query
}

pub(crate) use page_query as shared_page_query;

#[cfg(test)]
mod tests {
    use super::*;

    fn find<'a>(query: &'a [(&str, String)], key: &str) -> Option<&'a str> {
        query
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_page_query_always_present() {
        let req = PageRequest {
            page: 3,
            size: 25,
            sort_by: "sku".to_string(),
        };
        let query = product_query(&req, &ProductFilters::default());

        assert_eq!(find(&query, "page"), Some("3"));
        assert_eq!(find(&query, "size"), Some("25"));
        assert_eq!(find(&query, "sortBy"), Some("sku"));
        assert_eq!(query.len(), 3);
    }

    #[test]
    fn test_set_filters_become_query_params() {
        let filters = ProductFilters {
            name: Some("lavanda".to_string()),
            sku: None,
            barcode: None,
            aroma_id: Some(4),
            family_id: None,
            active: Some(false),
        };
        let query = product_query(&PageRequest::default(), &filters);

        assert_eq!(find(&query, "nombre"), Some("lavanda"));
        assert_eq!(find(&query, "aromaId"), Some("4"));
        assert_eq!(find(&query, "activo"), Some("false"));
        assert_eq!(find(&query, "sku"), None);
        assert_eq!(find(&query, "familiaId"), None);
    }

    #[test]
    fn test_change_status_body_wire_names() {
        let body = ChangeStatusBody {
            id: 12,
            active: false,
        };
        let json = serde_json::to_value(&body).expect("serializes");
        assert_eq!(json["id"], 12);
        assert_eq!(json["activo"], false);
    }
}
