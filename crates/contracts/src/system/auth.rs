use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credenciales {
    pub username: String,
    pub password: String,
}

/// Payload of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SesionIniciada {
    pub access_token: String,
    pub token_type: String,
}

/// Resolved profile of the logged-in user (`GET /auth/me`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usuario {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub role_id: i64,
    pub role_name: String,
    pub created_at: Option<NaiveDateTime>,
}

impl Usuario {
    /// Role gate for the admin-only screens.
    pub fn es_admin(&self) -> bool {
        self.role_name.eq_ignore_ascii_case("admin")
    }

    /// Name shown in the top bar: full name when set, username otherwise.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PerfilUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CambioPassword {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usuario(role: &str, full_name: Option<&str>) -> Usuario {
        Usuario {
            id: 1,
            email: "op@planta.test".into(),
            username: "operario".into(),
            full_name: full_name.map(String::from),
            is_active: true,
            role_id: 2,
            role_name: role.into(),
            created_at: None,
        }
    }

    #[test]
    fn admin_gate_is_case_insensitive() {
        assert!(usuario("Admin", None).es_admin());
        assert!(usuario("admin", None).es_admin());
        assert!(!usuario("operador", None).es_admin());
    }

    #[test]
    fn display_name_falls_back_to_username() {
        assert_eq!(usuario("admin", Some("Ana Pérez")).display_name(), "Ana Pérez");
        assert_eq!(usuario("admin", Some("  ")).display_name(), "operario");
        assert_eq!(usuario("admin", None).display_name(), "operario");
    }
}
