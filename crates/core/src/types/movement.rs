//! Inventory movement rows.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One movement row from the paged movement-history query.
///
/// Kind and reason are server-defined vocabularies; the client passes them
/// through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub id: i64,
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "motivo")]
    pub reason: String,
    #[serde(rename = "cantidad")]
    pub quantity: i64,
    #[serde(rename = "productoId")]
    pub product_id: i64,
    #[serde(rename = "productoNombre")]
    pub product_name: Option<String>,
    #[serde(rename = "usuarioId")]
    pub user_id: i64,
    #[serde(rename = "usuarioNombre")]
    pub user_name: Option<String>,
    #[serde(rename = "fecha")]
    pub date: NaiveDateTime,
}
