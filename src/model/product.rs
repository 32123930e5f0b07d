use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Catalog product, persisted in the `DB_CATALOGO` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    #[serde(rename = "nombre_inv")]
    pub name: String,
    #[serde(rename = "codigo_inv")]
    pub code: String,
    #[serde(rename = "precio_inv")]
    pub price: f64,
    #[serde(rename = "stock_inv")]
    pub stock: i32,
    #[serde(rename = "tipoStock_inv")]
    pub stock_type: String,
    #[serde(rename = "descripcion_inv")]
    pub description: String,
}
