use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::dto::product_dto::{ProductDto, UpdateProductRequest};
use crate::handler::parse_object_id;
use crate::repository::product_repo::ProductRepository;
use crate::util::error::HandlerError;

// --- Admin product management ---

pub async fn create_product_handler(
    State(repo): State<Arc<dyn ProductRepository>>,
    Json(payload): Json<ProductDto>,
) -> Result<impl IntoResponse, HandlerError> {
    let created = repo.insert(payload.into_model()).await?;
    Ok((StatusCode::CREATED, Json(ProductDto::from(created))))
}

pub async fn list_products_admin_handler(
    State(repo): State<Arc<dyn ProductRepository>>,
) -> Result<impl IntoResponse, HandlerError> {
    let products = repo.find_all().await?;
    let products: Vec<ProductDto> = products.into_iter().map(ProductDto::from).collect();
    Ok(Json(products))
}

pub async fn get_product_admin_handler(
    State(repo): State<Arc<dyn ProductRepository>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id)?;
    match repo.find_by_id(id).await? {
        Some(product) => Ok(Json(ProductDto::from(product))),
        None => Err(HandlerError::not_found(format!("Product not found for ID: {}", id))),
    }
}

/// Admin update: overwrites exactly {name, description, price, stock, code}.
/// `stockType` keeps its stored value.
pub async fn update_product_handler(
    State(repo): State<Arc<dyn ProductRepository>>,
    Path((id,)): Path<(String,)>,
    Json(payload): Json<UpdateProductRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id)?;
    let Some(mut product) = repo.find_by_id(id).await? else {
        return Err(HandlerError::not_found(format!("Product not found for ID: {}", id)));
    };
    product.name = payload.name;
    product.description = payload.description;
    product.price = payload.price;
    product.stock = payload.stock;
    product.code = payload.code;
    let updated = repo.update(id, product).await?;
    Ok(Json(ProductDto::from(updated)))
}

pub async fn delete_product_handler(
    State(repo): State<Arc<dyn ProductRepository>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id)?;
    if !repo.exists(id).await? {
        return Err(HandlerError::not_found(format!("Product not found for ID: {}", id)));
    }
    repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// --- Public catalog ---
// Same repository calls as the admin reads, exposed on an unauthenticated path.

pub async fn list_products_public_handler(
    State(repo): State<Arc<dyn ProductRepository>>,
) -> Result<impl IntoResponse, HandlerError> {
    let products = repo.find_all().await?;
    let products: Vec<ProductDto> = products.into_iter().map(ProductDto::from).collect();
    Ok(Json(products))
}

pub async fn get_product_public_handler(
    State(repo): State<Arc<dyn ProductRepository>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id)?;
    match repo.find_by_id(id).await? {
        Some(product) => Ok(Json(ProductDto::from(product))),
        None => Err(HandlerError::not_found(format!("Product not found for ID: {}", id))),
    }
}
