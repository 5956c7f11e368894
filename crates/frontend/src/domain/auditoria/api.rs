use contracts::common::Paginated;
use contracts::domain::auditoria::{
    AuditoriaListParams, EstadisticasAuditoria, FiltrosAuditoria, RegistroAuditoria,
};

use crate::shared::http;

pub async fn list(params: &AuditoriaListParams) -> Result<Paginated<RegistroAuditoria>, String> {
    http::get_query("/auditoria", params).await
}

/// Action/entity values the server knows about, for the filter selects.
pub async fn filtros() -> Result<FiltrosAuditoria, String> {
    http::get_json("/auditoria/filtros").await
}

pub async fn estadisticas(
    fecha_desde: Option<String>,
    fecha_hasta: Option<String>,
) -> Result<EstadisticasAuditoria, String> {
    let params = AuditoriaListParams {
        fecha_desde,
        fecha_hasta,
        ..Default::default()
    };
    http::get_query("/auditoria/estadisticas", &params).await
}
