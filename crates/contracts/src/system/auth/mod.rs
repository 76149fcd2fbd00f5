use serde::{Deserialize, Serialize};

use crate::domain::a001_datasource::aggregate::Datasource;

/// Credentials sent by the login and signup forms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthInput {
    pub email: String,
    pub password: String,
}

impl AuthInput {
    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
}

/// Returned by `registerUser`, `loginUser` and `checkCurrentUser`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthPayload {
    pub user: Option<AuthUser>,
    #[serde(default)]
    pub project_ids: Vec<Datasource>,
    #[serde(default)]
    pub collections: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterVariables {
    pub user: AuthInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_payload_decodes_camel_case() {
        let raw = r#"{
            "user": {"id": "u1", "email": "a@b.c"},
            "projectIds": [{"id": "d1", "projectId": "shop", "type": "postgresql", "database": "shop_db"}],
            "collections": ["orders"]
        }"#;
        let payload: AuthPayload = serde_json::from_str(raw).unwrap();
        assert_eq!(payload.user.unwrap().email, "a@b.c");
        assert_eq!(payload.project_ids[0].project_id, "shop");
        assert_eq!(payload.collections, vec!["orders".to_string()]);
    }

    #[test]
    fn test_auth_input_is_complete() {
        let mut input = AuthInput::default();
        assert!(!input.is_complete());
        input.email = "a@b.c".into();
        input.password = " ".into();
        assert!(!input.is_complete());
        input.password = "secret".into();
        assert!(input.is_complete());
    }
}
