use contracts::shared::graphql::NoVariables;
use contracts::system::auth::{AuthInput, AuthPayload, MessageResponse, RegisterVariables};

use crate::shared::graphql::{execute, ApiError};

const AUTH_PAYLOAD_FIELDS: &str = r#"
    user { id email }
    projectIds { id database type projectId }
    collections
"#;

fn register_document() -> String {
    format!(
        "mutation RegisterUser($user: Auth!) {{ registerUser(user: $user) {{ {} }} }}",
        AUTH_PAYLOAD_FIELDS
    )
}

fn login_document() -> String {
    format!(
        "mutation LoginUser($email: String!, $password: String!) {{ loginUser(email: $email, password: $password) {{ {} }} }}",
        AUTH_PAYLOAD_FIELDS
    )
}

fn current_user_document() -> String {
    format!(
        "query CheckCurrentUser {{ checkCurrentUser {{ {} }} }}",
        AUTH_PAYLOAD_FIELDS
    )
}

const LOGOUT: &str = "mutation Logout { logout { message } }";

pub async fn register(user: AuthInput) -> Result<AuthPayload, ApiError> {
    execute(&register_document(), RegisterVariables { user }, "registerUser").await
}

pub async fn login(credentials: AuthInput) -> Result<AuthPayload, ApiError> {
    execute(&login_document(), credentials, "loginUser").await
}

pub async fn logout() -> Result<MessageResponse, ApiError> {
    execute(LOGOUT, NoVariables {}, "logout").await
}

/// Session restored from the cookie; fails when nobody is signed in.
pub async fn check_current_user() -> Result<AuthPayload, ApiError> {
    execute(&current_user_document(), NoVariables {}, "checkCurrentUser").await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_select_payload_fields() {
        for doc in [register_document(), login_document(), current_user_document()] {
            assert!(doc.contains("projectIds { id database type projectId }"));
            assert_eq!(doc.matches('{').count(), doc.matches('}').count());
        }
    }
}
