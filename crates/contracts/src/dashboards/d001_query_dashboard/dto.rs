use serde::{Deserialize, Serialize};

use crate::shared::Document;

/// Input of `getSQLQueryData`: a natural-language question about one project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptQuery {
    pub prompt: String,
    pub project_id: String,
}

/// Input of `executePostgreSQLQuery`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SqlExecution {
    pub project_id: String,
    pub sql_query: String,
}

/// Answer to a prompt: the generated statement and the rows it returned.
/// Delivered by the API as a JSON string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PromptAnswer {
    #[serde(default)]
    pub sql: String,
    #[serde(default)]
    pub result: Vec<Document>,
}

impl PromptAnswer {
    pub fn parse(raw: &str) -> Result<Self, String> {
        let mut answer: PromptAnswer = serde_json::from_str(raw)
            .map_err(|e| format!("Failed to parse prompt answer: {}", e))?;
        answer.result.retain(|row| !row.is_empty());
        Ok(answer)
    }
}

/// `{ documents }` returned by `executePostgreSQLQuery`.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryDocuments {
    pub documents: String,
}

impl QueryDocuments {
    /// Rows decoded from the JSON string; empty objects are dropped.
    pub fn rows(&self) -> Result<Vec<Document>, String> {
        parse_documents(&self.documents)
    }
}

pub fn parse_documents(raw: &str) -> Result<Vec<Document>, String> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    let mut rows: Vec<Document> =
        serde_json::from_str(raw).map_err(|e| format!("Failed to parse documents: {}", e))?;
    rows.retain(|row| !row.is_empty());
    Ok(rows)
}

/// Column names in first-seen order across all rows.
pub fn column_names(rows: &[Document]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for row in rows {
        for key in row.keys() {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
    }
    columns
}

/// Number of pages needed for `total` rows, at least one.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// Rows of the zero-based `page`; an out-of-range page is empty.
pub fn page_slice(rows: &[Document], page: usize, page_size: usize) -> &[Document] {
    let start = page.saturating_mul(page_size).min(rows.len());
    let end = start.saturating_add(page_size).min(rows.len());
    &rows[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_documents_drops_empty_rows() {
        let rows = parse_documents(r#"[{"id": 1}, {}, {"id": 2}]"#).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(parse_documents("").unwrap().is_empty());
        assert!(parse_documents("not json").is_err());
    }

    #[test]
    fn test_prompt_answer_parse() {
        let answer =
            PromptAnswer::parse(r#"{"sql": "SELECT 1", "result": [{"n": 1}, {}]}"#).unwrap();
        assert_eq!(answer.sql, "SELECT 1");
        assert_eq!(answer.result.len(), 1);
    }

    #[test]
    fn test_column_names_union_in_order() {
        let rows = parse_documents(r#"[{"a": 1, "b": 2}, {"b": 3, "c": 4}]"#).unwrap();
        assert_eq!(column_names(&rows), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_pagination() {
        let rows = parse_documents(
            &serde_json::to_string(&(0..23).map(|i| serde_json::json!({ "i": i })).collect::<Vec<_>>())
                .unwrap(),
        )
        .unwrap();
        assert_eq!(page_count(rows.len(), 10), 3);
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_slice(&rows, 2, 10).len(), 3);
        assert!(page_slice(&rows, 5, 10).is_empty());
    }

    #[test]
    fn test_sql_execution_serializes_camel_case() {
        let json = serde_json::to_value(SqlExecution {
            project_id: "shop".into(),
            sql_query: "SELECT 1 LIMIT 50;".into(),
        })
        .unwrap();
        assert_eq!(json["sqlQuery"], "SELECT 1 LIMIT 50;");
    }
}
