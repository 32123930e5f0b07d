use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// User role. The stored value is the uppercase wire string ("ADMIN" / "CLIENT").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Admin,
    #[default]
    Client,
}

/// User document, persisted in the `DB_USERS` collection.
///
/// Field renames map to the legacy storage keys; the wire shape lives in
/// `dto::user_dto`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(rename = "contrasena")]
    pub password: String,
    #[serde(rename = "tipo_usuario")]
    pub role: UserRole,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "rut")]
    pub national_id: String,
    #[serde(rename = "numero_de_telefono")]
    pub phone: String,
}
