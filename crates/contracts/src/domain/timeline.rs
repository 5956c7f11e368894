use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::estado_linea::{TipoEstadoOption, UsuarioRef};
use super::linea::LineaRef;
use super::sector::SectorRef;

/// One state interval as served by the timeline endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEstado {
    pub id: i64,
    pub sector_id: i64,
    pub linea_id: i64,
    pub tipo_estado: String,
    pub tipo_estado_label: String,
    pub fecha_hora_inicio: NaiveDateTime,
    pub fecha_hora_fin: Option<NaiveDateTime>,
    pub duracion_minutos: Option<i64>,
    pub observaciones: Option<String>,
    #[serde(default)]
    pub sector: Option<SectorRef>,
    #[serde(default)]
    pub linea: Option<LineaRef>,
    #[serde(default)]
    pub usuario: Option<UsuarioRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineLinea {
    pub id: i64,
    pub nombre: String,
    pub estados: Vec<TimelineEstado>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineSector {
    pub id: i64,
    pub nombre: String,
    pub lineas: Vec<TimelineLinea>,
}

/// Full payload of `GET /estados-linea/timeline/{fecha}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineDia {
    pub fecha: NaiveDate,
    pub sectores: Vec<TimelineSector>,
    pub estados: Vec<TimelineEstado>,
    pub tipos_estado: Vec<TipoEstadoOption>,
}

impl TimelineDia {
    /// True when there is no line to draw a row for.
    pub fn sin_lineas(&self) -> bool {
        self.sectores.is_empty() || self.sectores.iter().all(|s| s.lineas.is_empty())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimelineParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linea_id: Option<i64>,
}
