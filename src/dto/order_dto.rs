use serde::{Deserialize, Serialize};

use crate::model::order::Order;

/// Wire representation of an order. Persisted verbatim on create: no
/// existence check on `userId`/`productIds`, no stock mutation, no total
/// recomputation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_id: String,
    pub product_ids: Vec<String>,
    pub order_date: Option<String>,
    pub total_amount: f64,
    pub status: String,
}

impl OrderDto {
    pub fn into_model(self) -> Order {
        Order {
            id: None,
            user_id: self.user_id,
            product_ids: self.product_ids,
            order_date: self.order_date,
            total_amount: self.total_amount,
            status: self.status,
        }
    }
}

impl From<Order> for OrderDto {
    fn from(order: Order) -> Self {
        OrderDto {
            id: order.id.map(|id| id.to_hex()),
            user_id: order.user_id,
            product_ids: order.product_ids,
            order_date: order.order_date,
            total_amount: order.total_amount,
            status: order.status,
        }
    }
}
