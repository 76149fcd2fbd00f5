//! GraphQL request/response envelopes used by the query API.

use serde::{Deserialize, Serialize};

/// Body of a GraphQL POST request.
#[derive(Debug, Clone, Serialize)]
pub struct GraphqlRequest<'a, V: Serialize> {
    pub query: &'a str,
    pub variables: V,
}

/// Body of a GraphQL response. `data` can be present together with `errors`
/// when only part of the selection failed.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphqlErrorMessage>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphqlErrorMessage {
    pub message: String,
    #[serde(default)]
    pub path: Option<Vec<serde_json::Value>>,
}

impl<T> GraphqlResponse<T> {
    /// Joined error messages, or `None` when the server reported none.
    pub fn error_summary(&self) -> Option<String> {
        let errors = self.errors.as_ref().filter(|e| !e.is_empty())?;
        Some(
            errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}

/// Variables for operations without arguments.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct NoVariables {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_data_only() {
        let raw = r#"{"data":{"getCharts":[]}}"#;
        let resp: GraphqlResponse<serde_json::Value> = serde_json::from_str(raw).unwrap();
        assert!(resp.data.is_some());
        assert!(resp.error_summary().is_none());
    }

    #[test]
    fn test_decode_errors() {
        let raw = r#"{"data":null,"errors":[{"message":"Invalid credentials"},{"message":"Try again","path":["loginUser"]}]}"#;
        let resp: GraphqlResponse<serde_json::Value> = serde_json::from_str(raw).unwrap();
        assert!(resp.data.is_none());
        assert_eq!(
            resp.error_summary().as_deref(),
            Some("Invalid credentials; Try again")
        );
    }

    #[test]
    fn test_request_serializes_variables() {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Vars {
            project_id: String,
        }
        let req = GraphqlRequest {
            query: "query Q($projectId: String!) { q(projectId: $projectId) }",
            variables: Vars {
                project_id: "p1".into(),
            },
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["variables"]["projectId"], "p1");
    }
}
