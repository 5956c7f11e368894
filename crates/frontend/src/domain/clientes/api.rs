use contracts::common::{ListParams, Paginated};
use contracts::domain::cliente::{Cliente, ClienteCreate, ClienteUpdate};

use crate::shared::http;

pub async fn list(params: &ListParams) -> Result<Paginated<Cliente>, String> {
    http::get_query("/clientes", params).await
}

pub async fn create(datos: &ClienteCreate) -> Result<Cliente, String> {
    http::post_json("/clientes", datos).await
}

pub async fn update(id: i64, datos: &ClienteUpdate) -> Result<Cliente, String> {
    http::put_json(&format!("/clientes/{}", id), datos).await
}

pub async fn delete(id: i64) -> Result<(), String> {
    http::delete(&format!("/clientes/{}", id)).await
}
