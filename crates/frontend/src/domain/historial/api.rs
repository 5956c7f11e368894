use contracts::domain::historial::{EstadisticasGenerales, Historial, HistorialParams};

use crate::shared::http;

pub async fn get(params: &HistorialParams) -> Result<Historial, String> {
    http::get_query("/historial", params).await
}

/// CSV of the ledger under the same filters, as raw bytes for download.
pub async fn exportar_csv(params: &HistorialParams) -> Result<Vec<u8>, String> {
    http::get_bytes("/historial/exportar/csv", params).await
}

pub async fn estadisticas(
    fecha_desde: Option<String>,
    fecha_hasta: Option<String>,
) -> Result<EstadisticasGenerales, String> {
    let params = HistorialParams {
        fecha_desde,
        fecha_hasta,
        ..Default::default()
    };
    http::get_query("/historial/estadisticas", &params).await
}
