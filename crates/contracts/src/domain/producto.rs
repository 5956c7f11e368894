use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::cliente::ClienteRef;

/// Product master record.
///
/// Carries the batch-format template (`formato_lote`), the packaging
/// provider/description pairs and the palletizing metrics the batch form
/// needs for its derived-value previews.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Producto {
    pub id: i64,
    pub codigo: String,
    pub nombre: String,
    pub descripcion: Option<String>,
    /// Batch number template, e.g. "AF01-25".
    pub formato_lote: Option<String>,
    pub cliente_id: Option<i64>,
    #[serde(default)]
    pub cliente: Option<ClienteRef>,
    pub tipo_producto: Option<String>,
    pub color_banda: Option<String>,
    pub codigo_producto: Option<String>,
    pub densidad: Option<f64>,
    // Packaging: provider + description per component
    pub bidon_proveedor: Option<String>,
    pub bidon_descripcion: Option<String>,
    pub tapa_proveedor: Option<String>,
    pub tapa_descripcion: Option<String>,
    pub pallet_proveedor: Option<String>,
    pub pallet_descripcion: Option<String>,
    pub cobertor_proveedor: Option<String>,
    pub cobertor_descripcion: Option<String>,
    pub funda_etiqueta_proveedor: Option<String>,
    pub funda_etiqueta_descripcion: Option<String>,
    pub esquinero_proveedor: Option<String>,
    pub esquinero_descripcion: Option<String>,
    // Palletizing
    pub litros_por_pallet: Option<f64>,
    pub bidones_por_pallet: Option<i64>,
    pub bidones_por_piso: Option<String>,
    pub unidad_medida: Option<String>,
    pub precio_unitario: Option<f64>,
    /// Shelf life in years; drives the expiry-date preview.
    pub anos_vencimiento: Option<i32>,
    pub litros_por_unidad: Option<f64>,
    pub activo: bool,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// Short form embedded in Lote responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductoRef {
    pub id: i64,
    pub codigo: String,
    pub nombre: String,
    pub anos_vencimiento: Option<i32>,
    pub litros_por_unidad: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductoCreate {
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formato_lote: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cliente_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_producto: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_banda: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codigo_producto: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub densidad: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bidon_proveedor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bidon_descripcion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tapa_proveedor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tapa_descripcion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pallet_proveedor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pallet_descripcion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cobertor_proveedor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cobertor_descripcion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funda_etiqueta_proveedor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funda_etiqueta_descripcion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub esquinero_proveedor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub esquinero_descripcion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub litros_por_pallet: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bidones_por_pallet: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bidones_por_piso: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unidad_medida: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precio_unitario: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anos_vencimiento: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub litros_por_unidad: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}

/// Partial update; only set fields are sent.
pub type ProductoUpdate = ProductoCreate;
