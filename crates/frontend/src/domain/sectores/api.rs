use contracts::common::{ListParams, Paginated};
use contracts::domain::sector::{Sector, SectorCreate, SectorUpdate};

use crate::shared::http;

pub async fn list(params: &ListParams) -> Result<Paginated<Sector>, String> {
    http::get_query("/sectores", params).await
}

pub async fn create(datos: &SectorCreate) -> Result<Sector, String> {
    http::post_json("/sectores", datos).await
}

pub async fn update(id: i64, datos: &SectorUpdate) -> Result<Sector, String> {
    http::put_json(&format!("/sectores/{}", id), datos).await
}

pub async fn delete(id: i64) -> Result<(), String> {
    http::delete(&format!("/sectores/{}", id)).await
}
