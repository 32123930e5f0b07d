use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::dto::user_dto::{UpdateProfileRequest, UpdateUserRequest, UserDto};
use crate::handler::parse_object_id;
use crate::repository::user_repo::UserRepository;
use crate::util::error::HandlerError;

// --- Admin user management ---

pub async fn create_user_handler(
    State(repo): State<Arc<dyn UserRepository>>,
    Json(payload): Json<UserDto>,
) -> Result<impl IntoResponse, HandlerError> {
    let created = repo.insert(payload.into_model()).await?;
    Ok((StatusCode::CREATED, Json(UserDto::from(created))))
}

pub async fn list_users_handler(
    State(repo): State<Arc<dyn UserRepository>>,
) -> Result<impl IntoResponse, HandlerError> {
    let users = repo.find_all().await?;
    let users: Vec<UserDto> = users.into_iter().map(UserDto::from).collect();
    Ok(Json(users))
}

pub async fn get_user_handler(
    State(repo): State<Arc<dyn UserRepository>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id)?;
    match repo.find_by_id(id).await? {
        Some(user) => Ok(Json(UserDto::from(user))),
        None => Err(HandlerError::not_found(format!("User not found for ID: {}", id))),
    }
}

/// Admin update: overwrites exactly {name, email, address, role}. Password
/// and the remaining fields keep their stored values.
pub async fn update_user_handler(
    State(repo): State<Arc<dyn UserRepository>>,
    Path((id,)): Path<(String,)>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id)?;
    let Some(mut user) = repo.find_by_id(id).await? else {
        return Err(HandlerError::not_found(format!("User not found for ID: {}", id)));
    };
    user.name = payload.name;
    user.email = payload.email;
    user.address = payload.address;
    user.role = payload.role;
    let updated = repo.update(id, user).await?;
    Ok(Json(UserDto::from(updated)))
}

pub async fn delete_user_handler(
    State(repo): State<Arc<dyn UserRepository>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id)?;
    if !repo.exists(id).await? {
        return Err(HandlerError::not_found(format!("User not found for ID: {}", id)));
    }
    repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// --- Profile self-service ---
// The id comes from the path, not from any verified session; there is no
// identity check in this layer.

pub async fn get_profile_handler(
    State(repo): State<Arc<dyn UserRepository>>,
    Path((user_id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&user_id)?;
    match repo.find_by_id(id).await? {
        Some(user) => Ok(Json(UserDto::from(user))),
        None => Err(HandlerError::not_found(format!("User not found for ID: {}", id))),
    }
}

/// Profile update: overwrites exactly {name, address, phone}. Unlike the
/// admin update, `email` and `role` in the body are never applied.
pub async fn update_profile_handler(
    State(repo): State<Arc<dyn UserRepository>>,
    Path((user_id,)): Path<(String,)>,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&user_id)?;
    let Some(mut user) = repo.find_by_id(id).await? else {
        return Err(HandlerError::not_found(format!("User not found for ID: {}", id)));
    };
    user.name = payload.name;
    user.address = payload.address;
    user.phone = payload.phone;
    let updated = repo.update(id, user).await?;
    Ok(Json(UserDto::from(updated)))
}
