use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::handler::product_handler::{
    create_product_handler, delete_product_handler, get_product_admin_handler,
    get_product_public_handler, list_products_admin_handler, list_products_public_handler,
    update_product_handler,
};
use crate::repository::product_repo::ProductRepository;

pub fn product_router(repo: Arc<dyn ProductRepository>) -> Router {
    // Admin CRUD
    let admin = Router::new()
        .route(
            "/admin/productos",
            post(create_product_handler).get(list_products_admin_handler),
        )
        .route(
            "/admin/productos/{id}",
            get(get_product_admin_handler)
                .put(update_product_handler)
                .delete(delete_product_handler),
        );

    // Public catalog
    let public = Router::new()
        .route("/productos", get(list_products_public_handler))
        .route("/productos/{id}", get(get_product_public_handler));

    admin.merge(public).with_state(repo)
}
