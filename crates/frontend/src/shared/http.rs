//! Authorized JSON transport used by every api module.
//!
//! Centralizes three cross-cutting concerns:
//! - the bearer token header on outgoing requests,
//! - 401 interception (clear the stored token, force `/login`),
//! - surfacing the server's `detail` message verbatim on failures.
//!
//! Errors are plain strings ready for an inline banner; callers never
//! retry automatically.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_utils::api_url;
use crate::system::auth::storage;

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Token invalid or expired: drop it and force the login screen, no matter
/// which screen issued the request.
fn forzar_login() {
    log::warn!("401 recibido, cerrando sesión");
    storage::clear_token();
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}

async fn error_message(response: Response) -> String {
    let status = response.status();
    if let Ok(value) = response.json::<serde_json::Value>().await {
        if let Some(detail) = value.get("detail").and_then(|d| d.as_str()) {
            return detail.to_string();
        }
    }
    format!("Error del servidor ({})", status)
}

async fn check(response: Response) -> Result<Response, String> {
    if response.status() == 401 {
        forzar_login();
        return Err("Sesión expirada".to_string());
    }
    if !response.ok() {
        return Err(error_message(response).await);
    }
    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Respuesta inválida del servidor: {}", e))
}

/// Append `params` as a query string. `None` fields are omitted.
pub fn with_query<P: Serialize>(path: &str, params: &P) -> String {
    match serde_qs::to_string(params) {
        Ok(qs) if !qs.is_empty() => format!("{}?{}", path, qs),
        _ => path.to_string(),
    }
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = with_auth(Request::get(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("Sin conexión con el servidor: {}", e))?;
    decode(check(response).await?).await
}

pub async fn get_query<T: DeserializeOwned, P: Serialize>(
    path: &str,
    params: &P,
) -> Result<T, String> {
    get_json(&with_query(path, params)).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let response = with_auth(Request::post(&api_url(path)))
        .json(body)
        .map_err(|e| format!("No se pudo serializar la petición: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Sin conexión con el servidor: {}", e))?;
    decode(check(response).await?).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let response = with_auth(Request::put(&api_url(path)))
        .json(body)
        .map_err(|e| format!("No se pudo serializar la petición: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Sin conexión con el servidor: {}", e))?;
    decode(check(response).await?).await
}

/// PUT without a body (e.g. `/users/{id}/toggle-active`).
pub async fn put_empty<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = with_auth(Request::put(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("Sin conexión con el servidor: {}", e))?;
    decode(check(response).await?).await
}

pub async fn delete(path: &str) -> Result<(), String> {
    let response = with_auth(Request::delete(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("Sin conexión con el servidor: {}", e))?;
    check(response).await?;
    Ok(())
}

/// GET returning the raw body bytes (CSV export).
pub async fn get_bytes<P: Serialize>(path: &str, params: &P) -> Result<Vec<u8>, String> {
    let response = with_auth(Request::get(&api_url(&with_query(path, params))))
        .send()
        .await
        .map_err(|e| format!("Sin conexión con el servidor: {}", e))?;
    check(response)
        .await?
        .binary()
        .await
        .map_err(|e| format!("No se pudo leer la descarga: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::common::ListParams;

    #[test]
    fn query_string_skips_unset_params() {
        let params = ListParams {
            page: Some(2),
            size: Some(10),
            search: None,
            activo: Some(true),
        };
        assert_eq!(with_query("/sectores", &params), "/sectores?page=2&size=10&activo=true");
    }

    #[test]
    fn query_string_empty_params_leave_path_untouched() {
        let params = ListParams::default();
        assert_eq!(with_query("/sectores", &params), "/sectores");
    }
}
