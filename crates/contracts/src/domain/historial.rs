use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::lote::Lote;

/// Aggregate figures for the ledger slice currently filtered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistorialEstadisticas {
    pub total_lotes: i64,
    pub total_litros: f64,
    pub total_pallets: i64,
    pub total_parciales: i64,
    pub productos_unicos: i64,
    pub fecha_primer_lote: Option<NaiveDate>,
    pub fecha_ultimo_lote: Option<NaiveDate>,
}

/// Payload of `GET /historial`: the page of batches plus the aggregate
/// statistics and the filters the server actually applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Historial {
    pub items: Vec<Lote>,
    pub estadisticas: HistorialEstadisticas,
    #[serde(default)]
    pub filtros_aplicados: BTreeMap<String, serde_json::Value>,
    pub total: i64,
    pub page: i64,
    pub size: i64,
    pub pages: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistorialParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_desde: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_hasta: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub producto_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numero_lote: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orden_campo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orden_direccion: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstadisticasPorProducto {
    pub producto_id: i64,
    pub producto_codigo: String,
    pub producto_nombre: String,
    pub total_lotes: i64,
    pub total_litros: f64,
    pub total_pallets: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalesGenerales {
    pub total_lotes: i64,
    pub total_litros: f64,
    pub total_pallets: i64,
    pub total_parciales: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiltrosFecha {
    pub fecha_desde: Option<NaiveDate>,
    pub fecha_hasta: Option<NaiveDate>,
}

/// Payload of `GET /historial/estadisticas`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstadisticasGenerales {
    pub general: TotalesGenerales,
    pub por_producto: Vec<EstadisticasPorProducto>,
    pub filtros: FiltrosFecha,
}
