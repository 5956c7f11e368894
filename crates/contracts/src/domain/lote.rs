use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::producto::ProductoRef;

/// Kind of anomaly the batch validation can flag. Advisory, never blocking
/// once the operator confirms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipoAdvertencia {
    LoteDuplicado,
    SaltoLote,
    FechaMuyAntigua,
    FechaFutura,
}

impl TipoAdvertencia {
    pub fn label(&self) -> &'static str {
        match self {
            TipoAdvertencia::LoteDuplicado => "Lote duplicado",
            TipoAdvertencia::SaltoLote => "Salto en la secuencia",
            TipoAdvertencia::FechaMuyAntigua => "Fecha muy antigua",
            TipoAdvertencia::FechaFutura => "Fecha futura",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvertenciaLote {
    pub tipo: TipoAdvertencia,
    pub mensaje: String,
    pub detalle: Option<String>,
}

/// Short form of the production run a batch is linked to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstadoLineaLoteRef {
    pub id: i64,
    pub tipo_estado: String,
    pub fecha_hora_inicio: Option<NaiveDateTime>,
}

/// Production batch record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lote {
    pub id: i64,
    pub numero_lote: String,
    pub producto_id: i64,
    pub estado_linea_id: Option<i64>,
    pub pallets: i64,
    pub parciales: i64,
    pub unidades_por_pallet: i64,
    pub litros_totales: Option<f64>,
    pub fecha_produccion: NaiveDate,
    pub fecha_vencimiento: Option<NaiveDate>,
    pub link_senasa: Option<String>,
    pub observaciones: Option<String>,
    pub usuario_id: Option<i64>,
    pub activo: bool,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub producto: Option<ProductoRef>,
    #[serde(default)]
    pub estado_linea: Option<EstadoLineaLoteRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoteCreate {
    pub numero_lote: String,
    pub producto_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado_linea_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pallets: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parciales: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unidades_por_pallet: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub litros_totales: Option<f64>,
    pub fecha_produccion: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_vencimiento: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_senasa: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
    /// Explicit operator confirmation that flagged anomalies are intended.
    #[serde(default)]
    pub ignorar_advertencias: bool,
}

pub type LoteUpdate = LoteCreate;

/// Three-outcome response of create/update:
/// created clean, rejected pending confirmation (`creado = false`),
/// or created with explicitly ignored warnings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoteGuardado {
    pub lote: Option<Lote>,
    pub advertencias: Vec<AdvertenciaLote>,
    pub creado: bool,
    pub mensaje: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidacionLoteRequest {
    pub numero_lote: String,
    pub producto_id: i64,
    pub fecha_produccion: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidacionLoteResponse {
    pub valido: bool,
    pub advertencias: Vec<AdvertenciaLote>,
    pub lote_anterior: Option<String>,
    pub lote_esperado: Option<String>,
}

/// Payload of `GET /lotes/producto/{id}/sugerir-numero`.
///
/// `sugerencia` is empty and `ultimo_lote` is `None` when the product has
/// no prior batches beyond the server's default starting hint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SugerenciaNumeroLote {
    pub sugerencia: String,
    pub ultimo_lote: Option<String>,
    pub mensaje: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoteListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub producto_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado_linea_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advertencia_wire_values() {
        assert_eq!(
            serde_json::to_string(&TipoAdvertencia::LoteDuplicado).unwrap(),
            "\"lote_duplicado\""
        );
        let parsed: TipoAdvertencia = serde_json::from_str("\"fecha_muy_antigua\"").unwrap();
        assert_eq!(parsed, TipoAdvertencia::FechaMuyAntigua);
    }

    #[test]
    fn guardado_rejected_pending_confirmation() {
        let json = r#"{
            "lote": null,
            "advertencias": [{
                "tipo": "lote_duplicado",
                "mensaje": "Ya existe un lote 'L-005' para este producto",
                "detalle": null
            }],
            "creado": false,
            "mensaje": "Se encontraron advertencias. Confirme para continuar."
        }"#;
        let resp: LoteGuardado = serde_json::from_str(json).unwrap();
        assert!(!resp.creado);
        assert!(resp.lote.is_none());
        assert_eq!(resp.advertencias.len(), 1);
        assert_eq!(resp.advertencias[0].tipo, TipoAdvertencia::LoteDuplicado);
    }

    #[test]
    fn sugerencia_sin_historial_viene_vacia() {
        let json = r#"{
            "sugerencia": "",
            "ultimo_lote": null,
            "mensaje": "No hay lotes anteriores."
        }"#;
        let resp: SugerenciaNumeroLote = serde_json::from_str(json).unwrap();
        assert!(resp.sugerencia.is_empty());
        assert!(resp.ultimo_lote.is_none());
    }

    #[test]
    fn create_omits_unset_fields_but_always_sends_confirmation_flag() {
        let dto = LoteCreate {
            numero_lote: "L-001".into(),
            producto_id: 4,
            estado_linea_id: None,
            pallets: Some(2),
            parciales: None,
            unidades_por_pallet: Some(48),
            litros_totales: None,
            fecha_produccion: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            fecha_vencimiento: None,
            link_senasa: None,
            observaciones: None,
            activo: None,
            ignorar_advertencias: false,
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("litros_totales").is_none());
        assert_eq!(json["ignorar_advertencias"], serde_json::json!(false));
        assert_eq!(json["fecha_produccion"], serde_json::json!("2025-03-10"));
    }
}
