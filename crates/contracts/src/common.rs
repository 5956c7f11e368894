use serde::{Deserialize, Serialize};

/// Standard paginated list envelope returned by every list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub size: i64,
    pub pages: i64,
}

impl<T> Paginated<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Query parameters accepted by every list endpoint.
///
/// `None` fields are omitted from the query string so the server applies
/// its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}

impl ListParams {
    pub fn page(page: i64, size: i64) -> Self {
        Self {
            page: Some(page),
            size: Some(size),
            ..Default::default()
        }
    }

    /// Shortcut for picker-style loads: first page, large size, active only.
    pub fn activos(size: i64) -> Self {
        Self {
            page: Some(1),
            size: Some(size),
            search: None,
            activo: Some(true),
        }
    }
}

/// Plain `{"message": ...}` acknowledgement body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginated_roundtrip() {
        let json = r#"{"items":[1,2,3],"total":3,"page":1,"size":10,"pages":1}"#;
        let page: Paginated<i32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.items, vec![1, 2, 3]);
        assert!(!page.is_empty());
    }

    #[test]
    fn list_params_skip_none() {
        let params = ListParams {
            page: Some(2),
            size: None,
            search: None,
            activo: Some(true),
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json, serde_json::json!({"page": 2, "activo": true}));
    }
}
