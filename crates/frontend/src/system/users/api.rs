use contracts::common::ApiMessage;
use contracts::system::auth::Usuario;
use contracts::system::users::{Rol, ResetPassword, UsuarioCreate, UsuarioUpdate, UsuariosListParams};

use crate::shared::http;

pub async fn list(params: &UsuariosListParams) -> Result<Vec<Usuario>, String> {
    http::get_query("/users", params).await
}

pub async fn create(datos: &UsuarioCreate) -> Result<Usuario, String> {
    http::post_json("/users", datos).await
}

pub async fn update(id: i64, datos: &UsuarioUpdate) -> Result<Usuario, String> {
    http::put_json(&format!("/users/{}", id), datos).await
}

pub async fn delete(id: i64) -> Result<(), String> {
    http::delete(&format!("/users/{}", id)).await
}

pub async fn reset_password(id: i64, datos: &ResetPassword) -> Result<ApiMessage, String> {
    http::put_json(&format!("/users/{}/reset-password", id), datos).await
}

pub async fn toggle_active(id: i64) -> Result<Usuario, String> {
    http::put_empty(&format!("/users/{}/toggle-active", id)).await
}

pub async fn roles() -> Result<Vec<Rol>, String> {
    http::get_json("/users/roles").await
}
