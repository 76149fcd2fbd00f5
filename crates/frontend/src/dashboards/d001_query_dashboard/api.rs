use contracts::dashboards::d001_query_dashboard::dto::{
    PromptAnswer, PromptQuery, QueryDocuments, SqlExecution,
};
use contracts::shared::Document;
use serde::Serialize;

use crate::shared::graphql::{execute, ApiError};

const GET_SQL_QUERY_DATA: &str = r#"
query GetSQLQueryData($info: AiSQLQuery!) {
  getSQLQueryData(info: $info)
}"#;

const GET_TABLES: &str = r#"
query GetSinglePostgreSQLCollections($projectId: String!) {
  getSinglePostgreSQLCollections(projectId: $projectId)
}"#;

const EXECUTE_QUERY: &str = r#"
query ExecutePostgreSQLQuery($data: PostGresqlExecution!) {
  executePostgreSQLQuery(data: $data) { documents }
}"#;

#[derive(Serialize)]
struct PromptVariables {
    info: PromptQuery,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectVariables<'a> {
    project_id: &'a str,
}

#[derive(Serialize)]
struct ExecuteVariables {
    data: SqlExecution,
}

/// Natural-language question answered with generated SQL and its rows.
pub async fn ask(project_id: &str, prompt: &str) -> Result<PromptAnswer, ApiError> {
    let raw: String = execute(
        GET_SQL_QUERY_DATA,
        PromptVariables {
            info: PromptQuery {
                prompt: prompt.to_string(),
                project_id: project_id.to_string(),
            },
        },
        "getSQLQueryData",
    )
    .await?;
    PromptAnswer::parse(&raw).map_err(ApiError::Decode)
}

/// Table names of the project's database.
pub async fn fetch_tables(project_id: &str) -> Result<Vec<String>, ApiError> {
    execute(GET_TABLES, ProjectVariables { project_id }, "getSinglePostgreSQLCollections").await
}

/// Run a statement that already went through the SELECT checks.
pub async fn run_query(project_id: &str, sql_query: &str) -> Result<Vec<Document>, ApiError> {
    let documents: QueryDocuments = execute(
        EXECUTE_QUERY,
        ExecuteVariables {
            data: SqlExecution {
                project_id: project_id.to_string(),
                sql_query: sql_query.to_string(),
            },
        },
        "executePostgreSQLQuery",
    )
    .await?;
    documents.rows().map_err(ApiError::Decode)
}
