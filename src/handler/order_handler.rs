use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::dto::order_dto::OrderDto;
use crate::handler::parse_object_id;
use crate::repository::order_repo::OrderRepository;
use crate::util::error::HandlerError;

/// Checkout pass-through: the order is persisted as sent. No stock decrement,
/// no total recomputation, no check that the referenced user or products exist.
pub async fn create_order_handler(
    State(repo): State<Arc<dyn OrderRepository>>,
    Json(payload): Json<OrderDto>,
) -> Result<impl IntoResponse, HandlerError> {
    let created = repo.insert(payload.into_model()).await?;
    Ok((StatusCode::CREATED, Json(OrderDto::from(created))))
}

/// Order history for a user. "No orders" is a valid empty result (200 + []),
/// never a 404.
pub async fn list_orders_by_user_handler(
    State(repo): State<Arc<dyn OrderRepository>>,
    Path((user_id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let orders = repo.find_by_user_id(&user_id).await?;
    let orders: Vec<OrderDto> = orders.into_iter().map(OrderDto::from).collect();
    Ok(Json(orders))
}

pub async fn get_order_handler(
    State(repo): State<Arc<dyn OrderRepository>>,
    Path((order_id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&order_id)?;
    match repo.find_by_id(id).await? {
        Some(order) => Ok(Json(OrderDto::from(order))),
        None => Err(HandlerError::not_found(format!("Order not found for ID: {}", id))),
    }
}
