use contracts::common::Paginated;
use contracts::domain::lote::{
    Lote, LoteCreate, LoteGuardado, LoteListParams, LoteUpdate, SugerenciaNumeroLote,
    ValidacionLoteRequest, ValidacionLoteResponse,
};

use crate::shared::http;

pub async fn list(params: &LoteListParams) -> Result<Paginated<Lote>, String> {
    http::get_query("/lotes", params).await
}

/// Create; may come back rejected with warnings (`creado = false`).
pub async fn create(datos: &LoteCreate) -> Result<LoteGuardado, String> {
    http::post_json("/lotes", datos).await
}

/// Update; same three-outcome response as create.
pub async fn update(id: i64, datos: &LoteUpdate) -> Result<LoteGuardado, String> {
    http::put_json(&format!("/lotes/{}", id), datos).await
}

pub async fn delete(id: i64) -> Result<(), String> {
    http::delete(&format!("/lotes/{}", id)).await
}

/// Dry-run validation, used to preview anomalies without persisting.
pub async fn validar(datos: &ValidacionLoteRequest) -> Result<ValidacionLoteResponse, String> {
    http::post_json("/lotes/validar", datos).await
}

pub async fn ultimo_lote(producto_id: i64) -> Result<Option<Lote>, String> {
    http::get_json(&format!("/lotes/producto/{}/ultimo", producto_id)).await
}

pub async fn sugerir_numero(producto_id: i64) -> Result<SugerenciaNumeroLote, String> {
    http::get_json(&format!("/lotes/producto/{}/sugerir-numero", producto_id)).await
}
