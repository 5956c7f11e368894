use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::linea::LineaRef;
use super::sector::SectorRef;

/// Line state type. Wire values are the lowercase snake_case strings the
/// backend stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipoEstado {
    Produccion,
    ParadaProgramada,
    ParadaNoProgramada,
    Mantenimiento,
    Limpieza,
    CambioFormato,
    SinDemanda,
    Otro,
}

impl TipoEstado {
    pub const ALL: [TipoEstado; 8] = [
        TipoEstado::Produccion,
        TipoEstado::ParadaProgramada,
        TipoEstado::ParadaNoProgramada,
        TipoEstado::Mantenimiento,
        TipoEstado::Limpieza,
        TipoEstado::CambioFormato,
        TipoEstado::SinDemanda,
        TipoEstado::Otro,
    ];

    /// Wire value, e.g. `"parada_programada"`.
    pub fn value(&self) -> &'static str {
        match self {
            TipoEstado::Produccion => "produccion",
            TipoEstado::ParadaProgramada => "parada_programada",
            TipoEstado::ParadaNoProgramada => "parada_no_programada",
            TipoEstado::Mantenimiento => "mantenimiento",
            TipoEstado::Limpieza => "limpieza",
            TipoEstado::CambioFormato => "cambio_formato",
            TipoEstado::SinDemanda => "sin_demanda",
            TipoEstado::Otro => "otro",
        }
    }

    /// Display label shown in forms, legend and tooltips.
    pub fn label(&self) -> &'static str {
        match self {
            TipoEstado::Produccion => "Producción",
            TipoEstado::ParadaProgramada => "Parada Programada",
            TipoEstado::ParadaNoProgramada => "Parada No Programada",
            TipoEstado::Mantenimiento => "Mantenimiento",
            TipoEstado::Limpieza => "Limpieza",
            TipoEstado::CambioFormato => "Cambio de Formato",
            TipoEstado::SinDemanda => "Sin Demanda",
            TipoEstado::Otro => "Otro",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.value() == value)
    }
}

impl std::fmt::Display for TipoEstado {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// `{value, label}` pair served by `/estados-linea/tipos-estado`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipoEstadoOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsuarioRef {
    pub id: i64,
    pub username: String,
    pub full_name: Option<String>,
}

/// One logged interval of a line being in some state.
///
/// `fecha_hora_fin` is `None` while the state is still open; the server
/// derives `duracion_minutos` once the interval closes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstadoLinea {
    pub id: i64,
    pub sector_id: i64,
    pub linea_id: i64,
    pub tipo_estado: String,
    pub tipo_estado_label: Option<String>,
    pub fecha_hora_inicio: NaiveDateTime,
    pub fecha_hora_fin: Option<NaiveDateTime>,
    pub duracion_minutos: Option<i64>,
    pub observaciones: Option<String>,
    pub usuario_id: Option<i64>,
    pub activo: bool,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub sector: Option<SectorRef>,
    #[serde(default)]
    pub linea: Option<LineaRef>,
    #[serde(default)]
    pub usuario: Option<UsuarioRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstadoLineaCreate {
    pub sector_id: i64,
    pub linea_id: i64,
    pub tipo_estado: String,
    pub fecha_hora_inicio: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_hora_fin: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duracion_minutos: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EstadoLineaUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linea_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_estado: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_hora_inicio: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_hora_fin: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duracion_minutos: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EstadoLineaListParams {
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linea_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_estado: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_desde: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_hasta: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn tipo_estado_wire_values() {
        assert_eq!(
            serde_json::to_string(&TipoEstado::ParadaNoProgramada).unwrap(),
            "\"parada_no_programada\""
        );
        let parsed: TipoEstado = serde_json::from_str("\"cambio_formato\"").unwrap();
        assert_eq!(parsed, TipoEstado::CambioFormato);
    }

    #[test]
    fn tipo_estado_value_label_agree() {
        for tipo in TipoEstado::ALL {
            assert_eq!(TipoEstado::from_value(tipo.value()), Some(tipo));
            assert!(!tipo.label().is_empty());
        }
        assert_eq!(TipoEstado::from_value("desconocido"), None);
    }

    #[test]
    fn estado_decodes_open_interval() {
        let json = r#"{
            "id": 7, "sector_id": 1, "linea_id": 2,
            "tipo_estado": "produccion", "tipo_estado_label": "Producción",
            "fecha_hora_inicio": "2025-03-10T06:30:00",
            "fecha_hora_fin": null, "duracion_minutos": null,
            "observaciones": null, "usuario_id": 3, "activo": true,
            "created_at": null, "updated_at": null
        }"#;
        let estado: EstadoLinea = serde_json::from_str(json).unwrap();
        assert!(estado.fecha_hora_fin.is_none());
        assert_eq!(estado.fecha_hora_inicio.time().hour(), 6);
    }
}
