use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::sector::SectorRef;

/// Production line. Always belongs to one sector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Linea {
    pub id: i64,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub sector_id: i64,
    pub activo: bool,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub sector: Option<SectorRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineaRef {
    pub id: i64,
    pub nombre: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineaCreate {
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    pub sector_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineaUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}

/// List filter: the generic params plus an optional sector restriction.
///
/// Kept flat (no nesting) so it serializes to a plain query string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineaListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector_id: Option<i64>,
}
