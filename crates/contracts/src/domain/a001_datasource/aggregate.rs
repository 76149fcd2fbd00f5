use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

// ============================================================================
// Summary
// ============================================================================

/// Data source summary as listed for the signed-in user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Datasource {
    pub id: String,
    pub project_id: String,
    #[serde(rename = "type", default)]
    pub source_type: String,
    #[serde(default)]
    pub database: Option<String>,
}

impl Datasource {
    pub fn database_name(&self) -> &str {
        self.database.as_deref().unwrap_or("")
    }
}

/// `{ dataSource: [...] }` wrapper returned by the data source mutations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasourceList {
    #[serde(default)]
    pub data_source: Vec<Datasource>,
}

/// `{ id }` returned by delete mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedRecord {
    pub id: String,
}

// ============================================================================
// Connection details
// ============================================================================

/// PostgreSQL connection as entered in the data source form.
///
/// `database_url`, `database_name`, `username` and `password` travel
/// base64-encoded between the client and the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostgresqlDatasource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub project_id: String,
    pub database_url: String,
    pub port: String,
    pub database_name: String,
    pub username: String,
    pub password: String,
    #[serde(rename = "type", default, skip_serializing)]
    pub source_type: Option<String>,
    #[serde(default, skip_serializing)]
    pub created_at: Option<String>,
}

pub const MIN_PORT_LEN: usize = 4;
pub const MAX_PORT_LEN: usize = 6;

impl PostgresqlDatasource {
    /// Every field filled in and a port of 4 to 6 characters.
    pub fn is_complete(&self) -> bool {
        let filled = [
            &self.project_id,
            &self.database_url,
            &self.port,
            &self.database_name,
            &self.username,
            &self.password,
        ]
        .iter()
        .all(|v| !v.trim().is_empty());

        let port_len = self.port.len();
        filled && (MIN_PORT_LEN..=MAX_PORT_LEN).contains(&port_len)
    }

    /// Copy with the credential fields base64-encoded, ready to send.
    pub fn encode_credentials(&self) -> Self {
        Self {
            database_url: encode_base64(&self.database_url),
            database_name: encode_base64(&self.database_name),
            username: encode_base64(&self.username),
            password: encode_base64(&self.password),
            ..self.clone()
        }
    }

    /// Copy with the credential fields decoded, for editing.
    pub fn decode_credentials(&self) -> Result<Self, String> {
        Ok(Self {
            database_url: decode_base64(&self.database_url)?,
            database_name: decode_base64(&self.database_name)?,
            username: decode_base64(&self.username)?,
            password: decode_base64(&self.password)?,
            ..self.clone()
        })
    }
}

pub fn encode_base64(value: &str) -> String {
    STANDARD.encode(value.as_bytes())
}

pub fn decode_base64(value: &str) -> Result<String, String> {
    let bytes = STANDARD
        .decode(value.trim())
        .map_err(|e| format!("Failed to decode base64 string: {}", e))?;
    String::from_utf8(bytes).map_err(|e| format!("Decoded value is not UTF-8: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PostgresqlDatasource {
        PostgresqlDatasource {
            project_id: "shop".into(),
            database_url: "db.example.com".into(),
            port: "5432".into(),
            database_name: "shop_db".into(),
            username: "reader".into(),
            password: "p@ss".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_is_complete() {
        assert!(sample().is_complete());

        let mut missing = sample();
        missing.username = "  ".into();
        assert!(!missing.is_complete());

        let mut short_port = sample();
        short_port.port = "54".into();
        assert!(!short_port.is_complete());

        let mut long_port = sample();
        long_port.port = "5432100".into();
        assert!(!long_port.is_complete());
    }

    #[test]
    fn test_credentials_roundtrip() {
        let encoded = sample().encode_credentials();
        assert_eq!(encoded.username, "cmVhZGVy");
        assert_eq!(encoded.project_id, "shop");
        assert_eq!(encoded.port, "5432");
        assert_eq!(encoded.decode_credentials().unwrap(), sample());
    }

    #[test]
    fn test_decode_invalid_base64() {
        assert!(decode_base64("not base64!").is_err());
    }

    #[test]
    fn test_serializes_without_read_only_fields() {
        let mut ds = sample();
        ds.created_at = Some("1710511346000".into());
        let json = serde_json::to_value(&ds).unwrap();
        assert_eq!(json["projectId"], "shop");
        assert!(json.get("createdAt").is_none());
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_datasource_decodes_type_field() {
        let ds: Datasource =
            serde_json::from_str(r#"{"id":"1","projectId":"shop","type":"postgresql"}"#).unwrap();
        assert_eq!(ds.source_type, "postgresql");
        assert_eq!(ds.database_name(), "");
    }
}
