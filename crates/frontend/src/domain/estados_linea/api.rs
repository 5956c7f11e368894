use contracts::common::Paginated;
use contracts::domain::estado_linea::{
    EstadoLinea, EstadoLineaCreate, EstadoLineaListParams, EstadoLineaUpdate, TipoEstadoOption,
};

use crate::shared::http;

pub async fn list(params: &EstadoLineaListParams) -> Result<Paginated<EstadoLinea>, String> {
    http::get_query("/estados-linea", params).await
}

pub async fn create(datos: &EstadoLineaCreate) -> Result<EstadoLinea, String> {
    http::post_json("/estados-linea", datos).await
}

pub async fn update(id: i64, datos: &EstadoLineaUpdate) -> Result<EstadoLinea, String> {
    http::put_json(&format!("/estados-linea/{}", id), datos).await
}

pub async fn delete(id: i64) -> Result<(), String> {
    http::delete(&format!("/estados-linea/{}", id)).await
}

pub async fn tipos_estado() -> Result<Vec<TipoEstadoOption>, String> {
    http::get_json("/estados-linea/tipos-estado").await
}
