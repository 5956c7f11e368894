use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One append-only audit record: who did what to which entity, with the
/// JSON snapshots of the state before and after. Read-only for the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistroAuditoria {
    pub id: i64,
    pub usuario_id: Option<i64>,
    pub usuario_username: Option<String>,
    pub accion: String,
    pub entidad: String,
    pub entidad_id: i64,
    pub entidad_descripcion: Option<String>,
    /// JSON snapshot (serialized string) of the record before the action.
    pub datos_anteriores: Option<String>,
    /// JSON snapshot (serialized string) of the record after the action.
    pub datos_nuevos: Option<String>,
    pub fecha_hora: NaiveDateTime,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub accion_label: Option<String>,
    pub entidad_label: Option<String>,
}

impl RegistroAuditoria {
    /// Snapshot string parsed back into JSON for pretty display, if present
    /// and well-formed.
    pub fn snapshot(raw: &Option<String>) -> Option<serde_json::Value> {
        raw.as_deref()
            .and_then(|s| serde_json::from_str(s).ok())
    }
}

/// Filter values the server supports, served alongside the list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiltrosAuditoria {
    pub acciones: Vec<String>,
    pub entidades: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditoriaListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usuario_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entidad: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_desde: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_hasta: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConteoPorAccion {
    pub accion: String,
    pub accion_label: String,
    pub cantidad: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConteoPorEntidad {
    pub entidad: String,
    pub entidad_label: String,
    pub cantidad: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConteoPorUsuario {
    pub usuario: String,
    pub cantidad: i64,
}

/// Payload of `GET /auditoria/estadisticas`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstadisticasAuditoria {
    pub total_logs: i64,
    pub por_accion: Vec<ConteoPorAccion>,
    pub por_entidad: Vec<ConteoPorEntidad>,
    pub por_usuario: Vec<ConteoPorUsuario>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_parses_stored_json_string() {
        let raw = Some(r#"{"nombre":"Sector A","activo":true}"#.to_string());
        let value = RegistroAuditoria::snapshot(&raw).unwrap();
        assert_eq!(value["nombre"], "Sector A");
        assert!(RegistroAuditoria::snapshot(&None).is_none());
        assert!(RegistroAuditoria::snapshot(&Some("not json".into())).is_none());
    }
}
