use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::dto::review_dto::ReviewDto;
use crate::repository::review_repo::ReviewRepository;
use crate::util::error::HandlerError;

pub async fn create_review_handler(
    State(repo): State<Arc<dyn ReviewRepository>>,
    Json(payload): Json<ReviewDto>,
) -> Result<impl IntoResponse, HandlerError> {
    let created = repo.insert(payload.into_model()).await?;
    Ok((StatusCode::CREATED, Json(ReviewDto::from(created))))
}

pub async fn list_reviews_by_product_handler(
    State(repo): State<Arc<dyn ReviewRepository>>,
    Path((product_id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let reviews = repo.find_by_product_id(&product_id).await?;
    let reviews: Vec<ReviewDto> = reviews.into_iter().map(ReviewDto::from).collect();
    Ok(Json(reviews))
}
