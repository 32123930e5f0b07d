use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::handler::review_handler::{create_review_handler, list_reviews_by_product_handler};
use crate::repository::review_repo::ReviewRepository;

pub fn review_router(repo: Arc<dyn ReviewRepository>) -> Router {
    Router::new()
        .route("/resenas", post(create_review_handler))
        .route("/resenas/producto/{producto_id}", get(list_reviews_by_product_handler))
        .with_state(repo)
}
