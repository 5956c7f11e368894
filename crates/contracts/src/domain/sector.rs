use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Plant sector. Parent of production lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sector {
    pub id: i64,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub activo: bool,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// Embedded short form used by entities that reference a sector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectorRef {
    pub id: i64,
    pub nombre: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectorCreate {
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectorUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}
