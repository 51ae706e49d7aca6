//! Product rows and inputs.
//!
//! Rows are server-defined records; the client only interprets the fields it
//! renders (name, sku, stock, active) and the identifier used for row keys.

use serde::{Deserialize, Serialize};

/// A `{ id, nombre }` reference to an aroma or family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
}

/// One product row from the paged product queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    pub sku: String,
    #[serde(rename = "codigoBarras")]
    pub barcode: Option<String>,
    pub stock: i64,
    #[serde(rename = "activo")]
    pub active: bool,
    #[serde(rename = "aroma")]
    pub aroma: Option<NamedRef>,
    #[serde(rename = "familia")]
    pub family: Option<NamedRef>,
    /// Unit price as reported by the server; display only.
    #[serde(rename = "precio")]
    pub price: Option<f64>,
}

/// Candidate returned by the name autocomplete lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameSuggestion {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
}

/// Payload for creating or updating a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    #[serde(rename = "nombre")]
    pub name: String,
    pub sku: String,
    #[serde(rename = "codigoBarras", skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    #[serde(rename = "aromaId", skip_serializing_if = "Option::is_none")]
    pub aroma_id: Option<i64>,
    #[serde(rename = "familiaId", skip_serializing_if = "Option::is_none")]
    pub family_id: Option<i64>,
    #[serde(rename = "precio", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(rename = "activo")]
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserializes_wire_names() {
        let json = r#"{
            "id": 12,
            "nombre": "Vela Lavanda",
            "sku": "LAV-001",
            "codigoBarras": "7790001234567",
            "stock": 40,
            "activo": true,
            "aroma": { "id": 4, "nombre": "Lavanda" },
            "familia": { "id": 2, "nombre": "Florales" },
            "precio": 1250.5
        }"#;

        let product: Product = serde_json::from_str(json).expect("valid product");
        assert_eq!(product.id, 12);
        assert_eq!(product.name, "Vela Lavanda");
        assert_eq!(product.stock, 40);
        assert!(product.active);
        assert_eq!(product.aroma.expect("aroma").name, "Lavanda");
    }

    #[test]
    fn test_product_input_skips_absent_fields() {
        let input = ProductInput {
            name: "Vela Vainilla".to_string(),
            sku: "VAI-001".to_string(),
            barcode: None,
            aroma_id: Some(7),
            family_id: None,
            price: None,
            active: true,
        };

        let json = serde_json::to_value(&input).expect("serializes");
        assert_eq!(json["nombre"], "Vela Vainilla");
        assert_eq!(json["aromaId"], 7);
        assert!(json.get("codigoBarras").is_none());
        assert!(json.get("familiaId").is_none());
    }
}
