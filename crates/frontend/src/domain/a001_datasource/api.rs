use contracts::domain::a001_datasource::aggregate::{
    Datasource, DatasourceList, DeletedRecord, PostgresqlDatasource,
};
use contracts::shared::graphql::NoVariables;
use contracts::system::auth::MessageResponse;
use serde::Serialize;

use crate::shared::graphql::{execute, ApiError};

const CHECK_CONNECTION: &str = r#"
mutation CheckPostgresqlConnection($datasource: DataSourceInfo!) {
  checkPostgresqlConnection(datasource: $datasource) { message }
}"#;

const CREATE_DATASOURCE: &str = r#"
mutation CreatePostgresqlDataSource($source: DataSourceInfo!) {
  createPostgresqlDataSource(source: $source) { dataSource { id projectId type database } }
}"#;

const EDIT_DATASOURCE: &str = r#"
mutation EditDataSource($source: DataSourceInfo!) {
  editDataSource(source: $source) { dataSource { id projectId type database } }
}"#;

const GET_DATASOURCES: &str = r#"
query GetDataSources {
  getDataSources { dataSource { id projectId type database } }
}"#;

const GET_DATASOURCE: &str = r#"
query GetDataSourceByProjectId($projectId: String!) {
  getDataSourceByProjectId(projectId: $projectId) {
    id userId projectId databaseUrl createdAt type port databaseName username password
  }
}"#;

const DELETE_DATASOURCE: &str = r#"
mutation DeleteDatasource($datasourceId: String!) {
  deleteDatasource(datasourceId: $datasourceId) { id }
}"#;

#[derive(Serialize)]
struct ConnectionVariables {
    datasource: PostgresqlDatasource,
}

#[derive(Serialize)]
struct SourceVariables {
    source: PostgresqlDatasource,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectVariables {
    project_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteVariables {
    datasource_id: String,
}

/// Sent as typed in; the server only tries to connect.
pub async fn check_connection(datasource: PostgresqlDatasource) -> Result<MessageResponse, ApiError> {
    execute(
        CHECK_CONNECTION,
        ConnectionVariables { datasource },
        "checkPostgresqlConnection",
    )
    .await
}

/// Credentials are base64-encoded before they leave the browser.
pub async fn create(datasource: &PostgresqlDatasource) -> Result<Vec<Datasource>, ApiError> {
    let source = datasource.encode_credentials();
    let list: DatasourceList =
        execute(CREATE_DATASOURCE, SourceVariables { source }, "createPostgresqlDataSource").await?;
    Ok(list.data_source)
}

pub async fn edit(datasource: &PostgresqlDatasource) -> Result<Vec<Datasource>, ApiError> {
    let source = datasource.encode_credentials();
    let list: DatasourceList = execute(EDIT_DATASOURCE, SourceVariables { source }, "editDataSource").await?;
    Ok(list.data_source)
}

pub async fn fetch_all() -> Result<Vec<Datasource>, ApiError> {
    let list: DatasourceList = execute(GET_DATASOURCES, NoVariables {}, "getDataSources").await?;
    Ok(list.data_source)
}

/// Connection details with credentials decoded for editing.
pub async fn fetch_by_project(project_id: &str) -> Result<PostgresqlDatasource, ApiError> {
    let stored: PostgresqlDatasource = execute(
        GET_DATASOURCE,
        ProjectVariables {
            project_id: project_id.to_string(),
        },
        "getDataSourceByProjectId",
    )
    .await?;
    stored.decode_credentials().map_err(ApiError::Decode)
}

pub async fn delete(datasource_id: &str) -> Result<DeletedRecord, ApiError> {
    execute(
        DELETE_DATASOURCE,
        DeleteVariables {
            datasource_id: datasource_id.to_string(),
        },
        "deleteDatasource",
    )
    .await
}
