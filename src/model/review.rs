use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Product review, persisted in the `DB_RESENAS` collection.
///
/// `rating` is intended to be 1..=5 but is not enforced anywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    #[serde(rename = "producto_id")]
    pub product_id: String,
    #[serde(rename = "usuario_id")]
    pub user_id: String,
    #[serde(rename = "calificacion")]
    pub rating: i32,
    #[serde(rename = "comentario")]
    pub comment: String,
    /// RFC 3339 timestamp; stamped at insert when the client omits it.
    #[serde(rename = "fecha_resena")]
    pub review_date: Option<String>,
}
