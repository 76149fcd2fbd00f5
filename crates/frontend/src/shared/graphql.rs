//! Client for the GraphQL query API.

use contracts::shared::graphql::{GraphqlRequest, GraphqlResponse};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use web_sys::RequestCredentials;

use crate::shared::config::AppConfig;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
    #[error("Failed to send request: {0}")]
    Network(String),
    #[error("Request failed with status {0}")]
    Http(u16),
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("{0}")]
    Graphql(String),
    #[error("Response contains no `{0}`")]
    MissingData(String),
}

impl ApiError {
    /// Message reported by the server, when there is one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Graphql(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// POST `document` with `variables` and decode `data[field]` into `T`.
///
/// The session cookie is always sent along.
pub async fn execute<V, T>(document: &str, variables: V, field: &str) -> Result<T, ApiError>
where
    V: Serialize,
    T: DeserializeOwned,
{
    let body = GraphqlRequest {
        query: document,
        variables,
    };

    let response = Request::post(&AppConfig::load().graphql_url)
        .credentials(RequestCredentials::Include)
        .json(&body)
        .map_err(|e| ApiError::Serialize(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    decode_response(status, &text, field)
}

/// GraphQL servers answer failed operations with an `errors` body and
/// either 200 or 4xx, so the body is read before the status is judged.
pub fn decode_response<T: DeserializeOwned>(
    status: u16,
    text: &str,
    field: &str,
) -> Result<T, ApiError> {
    let envelope: GraphqlResponse<Map<String, Value>> = match serde_json::from_str(text) {
        Ok(envelope) => envelope,
        Err(_) if !(200..300).contains(&status) => return Err(ApiError::Http(status)),
        Err(e) => return Err(ApiError::Decode(e.to_string())),
    };

    if let Some(message) = envelope.error_summary() {
        return Err(ApiError::Graphql(message));
    }
    if !(200..300).contains(&status) {
        return Err(ApiError::Http(status));
    }

    let value = envelope
        .data
        .and_then(|mut data| data.remove(field))
        .filter(|v| !v.is_null())
        .ok_or_else(|| ApiError::MissingData(field.to_string()))?;

    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::MessageResponse;

    #[test]
    fn test_decode_field() {
        let text = r#"{"data":{"logout":{"message":"Logged out"}}}"#;
        let resp: MessageResponse = decode_response(200, text, "logout").unwrap();
        assert_eq!(resp.message, "Logged out");
    }

    #[test]
    fn test_decode_scalar_list() {
        let text = r#"{"data":{"getSinglePostgreSQLCollections":["orders","users"]}}"#;
        let tables: Vec<String> = decode_response(200, text, "getSinglePostgreSQLCollections").unwrap();
        assert_eq!(tables, vec!["orders", "users"]);
    }

    #[test]
    fn test_graphql_errors_win_over_status() {
        let text = r#"{"errors":[{"message":"Invalid credentials"}],"data":null}"#;
        let err = decode_response::<MessageResponse>(400, text, "loginUser").unwrap_err();
        assert_eq!(err, ApiError::Graphql("Invalid credentials".into()));
        assert_eq!(err.server_message(), Some("Invalid credentials"));
    }

    #[test]
    fn test_non_json_error_status() {
        let err = decode_response::<MessageResponse>(502, "Bad Gateway", "x").unwrap_err();
        assert_eq!(err, ApiError::Http(502));
    }

    #[test]
    fn test_missing_and_null_field() {
        let err = decode_response::<MessageResponse>(200, r#"{"data":{"other":1}}"#, "logout")
            .unwrap_err();
        assert_eq!(err, ApiError::MissingData("logout".into()));
        let err = decode_response::<MessageResponse>(200, r#"{"data":{"logout":null}}"#, "logout")
            .unwrap_err();
        assert_eq!(err, ApiError::MissingData("logout".into()));
    }

    #[test]
    fn test_decode_type_mismatch() {
        let err = decode_response::<MessageResponse>(200, r#"{"data":{"logout":5}}"#, "logout")
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
