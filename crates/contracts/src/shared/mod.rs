pub mod date_utils;
pub mod graphql;
pub mod sql;

/// One result row as returned by the query API.
pub type Document = serde_json::Map<String, serde_json::Value>;
