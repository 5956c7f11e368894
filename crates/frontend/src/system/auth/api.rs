use contracts::common::ApiMessage;
use contracts::system::auth::{CambioPassword, Credenciales, PerfilUpdate, SesionIniciada, Usuario};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;
use crate::shared::http;

/// Login is the one call made without a session, so it bypasses the
/// authorized transport: a 401 here means bad credentials and must stay on
/// the login screen instead of triggering the global logout path.
pub async fn login(credenciales: &Credenciales) -> Result<SesionIniciada, String> {
    let response = Request::post(&api_url("/auth/login"))
        .json(credenciales)
        .map_err(|e| format!("No se pudo serializar la petición: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Sin conexión con el servidor: {}", e))?;

    if !response.ok() {
        if let Ok(value) = response.json::<serde_json::Value>().await {
            if let Some(detail) = value.get("detail").and_then(|d| d.as_str()) {
                return Err(detail.to_string());
            }
        }
        return Err("Usuario o contraseña incorrectos".to_string());
    }

    response
        .json::<SesionIniciada>()
        .await
        .map_err(|e| format!("Respuesta inválida del servidor: {}", e))
}

pub async fn get_me() -> Result<Usuario, String> {
    http::get_json("/auth/me").await
}

pub async fn update_perfil(datos: &PerfilUpdate) -> Result<Usuario, String> {
    http::put_json("/auth/me", datos).await
}

pub async fn cambiar_password(datos: &CambioPassword) -> Result<ApiMessage, String> {
    http::put_json("/auth/me/password", datos).await
}
