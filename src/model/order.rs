use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Order document, persisted in the `DB_PEDIDOS` collection.
///
/// `user_id` and `product_ids` are plain string references; nothing enforces
/// that they point at existing users or products. `total_amount` is
/// client-supplied and never recomputed. `status` is a free-form string
/// (e.g. "Pendiente", "Enviado", "Entregado").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    #[serde(rename = "usuario_id")]
    pub user_id: String,
    #[serde(rename = "producto_ids")]
    pub product_ids: Vec<String>,
    /// RFC 3339 timestamp; stamped at insert when the client omits it.
    #[serde(rename = "fecha_pedido")]
    pub order_date: Option<String>,
    #[serde(rename = "monto_total")]
    pub total_amount: f64,
    #[serde(rename = "estado")]
    pub status: String,
}
