//! Stock mutation operations.

use serde::Serialize;
use tracing::instrument;

use almacen_core::{StockMode, StockOperation};

use crate::client::InventoryClient;
use crate::error::ApiError;

/// Body for the absolute-set endpoint.
#[derive(Debug, Serialize)]
struct SetStockBody {
    #[serde(rename = "nuevaCantidad")]
    new_quantity: i64,
    #[serde(rename = "usuarioId")]
    user_id: i64,
}

/// Body for the relative ingresar/retirar endpoints.
#[derive(Debug, Serialize)]
struct AdjustStockBody {
    #[serde(rename = "cantidad")]
    quantity: i64,
    #[serde(rename = "usuarioId")]
    user_id: i64,
}

impl InventoryClient {
    /// Set a product's stock to an absolute value.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self), fields(product_id = %product_id, new_quantity = %new_quantity))]
    pub async fn set_stock(
        &self,
        product_id: i64,
        new_quantity: i64,
        user_id: i64,
    ) -> Result<(), ApiError> {
        self.patch_unit(
            &format!("/api/productos/stock/{product_id}"),
            &SetStockBody {
                new_quantity,
                user_id,
            },
        )
        .await
    }

    /// Add stock to a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self), fields(product_id = %product_id, quantity = %quantity))]
    pub async fn add_stock(
        &self,
        product_id: i64,
        quantity: i64,
        user_id: i64,
    ) -> Result<(), ApiError> {
        self.patch_unit(
            &format!("/api/productos/ingresar-stock/{product_id}"),
            &AdjustStockBody { quantity, user_id },
        )
        .await
    }

    /// Remove stock from a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self), fields(product_id = %product_id, quantity = %quantity))]
    pub async fn remove_stock(
        &self,
        product_id: i64,
        quantity: i64,
        user_id: i64,
    ) -> Result<(), ApiError> {
        self.patch_unit(
            &format!("/api/productos/retirar-stock/{product_id}"),
            &AdjustStockBody { quantity, user_id },
        )
        .await
    }

    /// Submit a stock operation to the endpoint matching its mode.
    ///
    /// Exactly one call is issued. Zero-magnitude adjustments never reach
    /// this method - `StockOperation::adjust` returns `Ok(None)` for them.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn apply_stock_operation(&self, op: &StockOperation) -> Result<(), ApiError> {
        match op.mode {
            StockMode::Set => {
                self.set_stock(op.product_id, op.magnitude, op.user_id)
                    .await
            }
            StockMode::Increment => {
                self.add_stock(op.product_id, op.magnitude, op.user_id)
                    .await
            }
            StockMode::Decrement => {
                self.remove_stock(op.product_id, op.magnitude, op.user_id)
                    .await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_stock_body_wire_names() {
        let body = SetStockBody {
            new_quantity: 150,
            user_id: 3,
        };
        let json = serde_json::to_value(&body).expect("serializes");
        assert_eq!(json["nuevaCantidad"], 150);
        assert_eq!(json["usuarioId"], 3);
    }

    #[test]
    fn test_adjust_stock_body_wire_names() {
        let body = AdjustStockBody {
            quantity: 5,
            user_id: 3,
        };
        let json = serde_json::to_value(&body).expect("serializes");
        assert_eq!(json["cantidad"], 5);
        assert_eq!(json["usuarioId"], 3);
    }
}
