use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::handler::order_handler::{
    create_order_handler, get_order_handler, list_orders_by_user_handler,
};
use crate::repository::order_repo::OrderRepository;

pub fn order_router(repo: Arc<dyn OrderRepository>) -> Router {
    Router::new()
        .route("/pedidos", post(create_order_handler))
        .route("/pedidos/usuario/{usuario_id}", get(list_orders_by_user_handler))
        .route("/pedidos/{pedido_id}", get(get_order_handler))
        .with_state(repo)
}
