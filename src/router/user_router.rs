use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::handler::user_handler::{
    create_user_handler, delete_user_handler, get_profile_handler, get_user_handler,
    list_users_handler, update_profile_handler, update_user_handler,
};
use crate::repository::user_repo::UserRepository;

pub fn user_router(repo: Arc<dyn UserRepository>) -> Router {
    // Admin CRUD
    let admin = Router::new()
        .route("/admin/usuarios", post(create_user_handler).get(list_users_handler))
        .route(
            "/admin/usuarios/{id}",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        );

    // Self-service profile (id from the path, no session)
    let profile = Router::new().route(
        "/perfil/{usuario_id}",
        get(get_profile_handler).put(update_profile_handler),
    );

    admin.merge(profile).with_state(repo)
}
