use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Customer master record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cliente {
    pub id: i64,
    pub codigo: String,
    pub nombre: String,
    pub razon_social: Option<String>,
    pub cuit: Option<String>,
    pub direccion: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,
    pub contacto: Option<String>,
    pub activo: bool,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// Short form embedded in Producto responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClienteRef {
    pub id: i64,
    pub codigo: String,
    pub nombre: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClienteCreate {
    pub codigo: String,
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub razon_social: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacto: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}

pub type ClienteUpdate = ClienteCreate;
