use contracts::common::{ListParams, Paginated};
use contracts::domain::producto::{Producto, ProductoCreate, ProductoUpdate};

use crate::shared::http;

pub async fn list(params: &ListParams) -> Result<Paginated<Producto>, String> {
    http::get_query("/productos", params).await
}

pub async fn create(datos: &ProductoCreate) -> Result<Producto, String> {
    http::post_json("/productos", datos).await
}

pub async fn update(id: i64, datos: &ProductoUpdate) -> Result<Producto, String> {
    http::put_json(&format!("/productos/{}", id), datos).await
}

pub async fn delete(id: i64) -> Result<(), String> {
    http::delete(&format!("/productos/{}", id)).await
}

/// Active products for the batch form and the historial filter.
pub async fn list_activos() -> Result<Vec<Producto>, String> {
    list(&ListParams::activos(1000)).await.map(|p| p.items)
}
