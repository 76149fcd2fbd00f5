use contracts::domain::a001_datasource::aggregate::DeletedRecord;
use contracts::domain::a002_chart::aggregate::{ChartConfiguration, ChartInfo, GeneratedChart};
use serde::Serialize;

use crate::shared::graphql::{execute, ApiError};

const GENERATE_CHART: &str = r#"
query GenerateChart($info: AiChartQuery!) {
  generateChart(info: $info)
}"#;

const GET_CHARTS: &str = r#"
query GetCharts($userId: String!) {
  getCharts(userId: $userId) {
    id datasourceId userId projectId chartName chartType xAxis yAxis queryData chartData prompt sql createdAt
  }
}"#;

const GET_CHART_INFO: &str = r#"
query GetChartInfo($chartId: String!) {
  getChartInfo(chartId: $chartId) {
    id datasourceId userId projectId chartName chartType xAxis yAxis queryData chartData prompt sql createdAt
  }
}"#;

const CREATE_CHART: &str = r#"
mutation CreateNewChartInfo($data: ChartInfoQuery!) {
  createNewChartInfo(data: $data) {
    id datasourceId userId chartName chartType xAxis yAxis queryData chartData prompt sql createdAt
  }
}"#;

const UPDATE_CHART: &str = r#"
mutation UpdateChart($chartId: String!, $data: ChartInfoQuery!) {
  updateChart(chartId: $chartId, data: $data) {
    id datasourceId userId chartName chartType xAxis yAxis queryData chartData prompt sql createdAt
  }
}"#;

const DELETE_CHART: &str = r#"
mutation DeleteChart($chartId: String!) {
  deleteChart(chartId: $chartId) { id }
}"#;

#[derive(Serialize)]
struct GenerateVariables<'a> {
    info: &'a ChartConfiguration,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UserVariables<'a> {
    user_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChartIdVariables<'a> {
    chart_id: &'a str,
}

#[derive(Serialize)]
struct CreateVariables<'a> {
    data: &'a ChartInfo,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateVariables<'a> {
    chart_id: &'a str,
    data: &'a ChartInfo,
}

/// Ask the API to write SQL for the prompt, run it and describe a chart.
/// The answer arrives as a JSON string.
pub async fn generate_chart(info: &ChartConfiguration) -> Result<GeneratedChart, ApiError> {
    let raw: String = execute(GENERATE_CHART, GenerateVariables { info }, "generateChart").await?;
    GeneratedChart::parse(&raw).map_err(ApiError::Decode)
}

pub async fn fetch_charts(user_id: &str) -> Result<Vec<ChartInfo>, ApiError> {
    execute(GET_CHARTS, UserVariables { user_id }, "getCharts").await
}

pub async fn fetch_chart(chart_id: &str) -> Result<ChartInfo, ApiError> {
    execute(GET_CHART_INFO, ChartIdVariables { chart_id }, "getChartInfo").await
}

pub async fn create(data: &ChartInfo) -> Result<ChartInfo, ApiError> {
    execute(CREATE_CHART, CreateVariables { data }, "createNewChartInfo").await
}

pub async fn update(chart_id: &str, data: &ChartInfo) -> Result<ChartInfo, ApiError> {
    execute(UPDATE_CHART, UpdateVariables { chart_id, data }, "updateChart").await
}

pub async fn delete(chart_id: &str) -> Result<DeletedRecord, ApiError> {
    execute(DELETE_CHART, ChartIdVariables { chart_id }, "deleteChart").await
}
