use serde::{Deserialize, Serialize};

use crate::model::user::{User, UserRole};

/// Wire representation of a user. Request bodies never carry an id (a
/// client-supplied one is discarded on create); responses always do.
///
/// Missing fields on the way in deserialize to defaults rather than being
/// rejected, so a sparse body persists empty strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub name: String,
    pub address: String,
    pub national_id: String,
    pub phone: String,
}

impl Default for UserDto {
    fn default() -> Self {
        UserDto {
            id: None,
            email: String::new(),
            password: String::new(),
            role: UserRole::default(),
            name: String::new(),
            address: String::new(),
            national_id: String::new(),
            phone: String::new(),
        }
    }
}

impl UserDto {
    pub fn into_model(self) -> User {
        User {
            id: None,
            email: self.email,
            password: self.password,
            role: self.role,
            name: self.name,
            address: self.address,
            national_id: self.national_id,
            phone: self.phone,
        }
    }
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        UserDto {
            id: user.id.map(|id| id.to_hex()),
            email: user.email,
            password: user.password,
            role: user.role,
            name: user.name,
            address: user.address,
            national_id: user.national_id,
            phone: user.phone,
        }
    }
}

/// Admin patch: the only fields the admin update honors. `role` is mutable
/// here, unlike the profile patch below.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateUserRequest {
    pub name: String,
    pub email: String,
    pub address: String,
    pub role: UserRole,
}

/// Self-service patch: name, address and phone only. `role` and `email` in
/// the body are dropped at deserialization, never applied.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub address: String,
    pub phone: String,
}
