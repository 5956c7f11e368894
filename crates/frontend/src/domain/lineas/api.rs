use contracts::common::Paginated;
use contracts::domain::linea::{Linea, LineaCreate, LineaListParams, LineaUpdate};

use crate::shared::http;

pub async fn list(params: &LineaListParams) -> Result<Paginated<Linea>, String> {
    http::get_query("/lineas", params).await
}

pub async fn create(datos: &LineaCreate) -> Result<Linea, String> {
    http::post_json("/lineas", datos).await
}

pub async fn update(id: i64, datos: &LineaUpdate) -> Result<Linea, String> {
    http::put_json(&format!("/lineas/{}", id), datos).await
}

pub async fn delete(id: i64) -> Result<(), String> {
    http::delete(&format!("/lineas/{}", id)).await
}

/// Active lines for selects; large page so pickers see everything.
pub async fn list_activas() -> Result<Vec<Linea>, String> {
    let params = LineaListParams {
        page: Some(1),
        size: Some(100),
        activo: Some(true),
        ..Default::default()
    };
    list(&params).await.map(|p| p.items)
}
