use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::shared::Document;

// ============================================================================
// Chart kind
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChartKind {
    Number,
    #[default]
    Bar,
    Line,
    Pie,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Number => "number",
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ChartKind::Number => "Number",
            ChartKind::Bar => "Bar",
            ChartKind::Line => "Line",
            ChartKind::Pie => "Pie",
        }
    }

    /// Unknown names fall back to `Bar`.
    pub fn from_name(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "number" => ChartKind::Number,
            "line" => ChartKind::Line,
            "pie" => ChartKind::Pie,
            _ => ChartKind::Bar,
        }
    }

    pub fn all() -> [ChartKind; 4] {
        [ChartKind::Number, ChartKind::Bar, ChartKind::Line, ChartKind::Pie]
    }
}

impl Serialize for ChartKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ChartKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(ChartKind::from_name(&s))
    }
}

// ============================================================================
// Chart data
// ============================================================================

/// Values a chart is drawn from: a single total, a plain series, or records
/// keyed by the axis fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChartData {
    Number(f64),
    Numbers(Vec<f64>),
    Records(Vec<Document>),
}

impl Default for ChartData {
    fn default() -> Self {
        ChartData::Records(Vec::new())
    }
}

impl ChartData {
    pub fn is_series(&self) -> bool {
        !matches!(self, ChartData::Number(_))
    }
}

/// Numeric reading of a JSON value; numeric strings count.
pub fn value_as_f64(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        serde_json::Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

/// Display text of a JSON value without surrounding quotes.
pub fn value_as_label(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

// ============================================================================
// Chart result (what the preview renders)
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartResult {
    #[serde(default)]
    pub x_axis: String,
    #[serde(default)]
    pub y_axis: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: ChartKind,
    #[serde(default)]
    pub data: ChartData,
}

impl ChartResult {
    /// Sum of the y-axis field over all records.
    pub fn total(&self) -> f64 {
        match &self.data {
            ChartData::Number(n) => *n,
            ChartData::Numbers(values) => values.iter().sum(),
            ChartData::Records(records) => records
                .iter()
                .filter_map(|r| r.get(&self.y_axis).and_then(value_as_f64))
                .sum(),
        }
    }

    /// `(label, value)` pairs in record order. Records without a numeric
    /// y value are skipped.
    pub fn series(&self) -> Vec<(String, f64)> {
        match &self.data {
            ChartData::Number(n) => vec![(self.title.clone(), *n)],
            ChartData::Numbers(values) => values
                .iter()
                .enumerate()
                .map(|(i, v)| ((i + 1).to_string(), *v))
                .collect(),
            ChartData::Records(records) => records
                .iter()
                .filter_map(|r| {
                    let value = r.get(&self.y_axis).and_then(value_as_f64)?;
                    let label = r.get(&self.x_axis).map(value_as_label).unwrap_or_default();
                    Some((label, value))
                })
                .collect(),
        }
    }

    /// Result of picking `kind` in the configuration panel, given the chart
    /// currently shown and the chart as originally generated.
    ///
    /// Switching to `Number` collapses the series into its total; switching
    /// away from `Number` restores the generated series. Pie charts are only
    /// drawn from generated data, so switching to `Pie` yields `None`.
    pub fn switch_kind(&self, generated: Option<&ChartResult>, kind: ChartKind) -> Option<ChartResult> {
        if kind == ChartKind::Pie {
            return None;
        }

        if self.kind != ChartKind::Number {
            let mut next = self.clone();
            next.kind = kind;
            if kind == ChartKind::Number {
                next.data = ChartData::Number(self.total());
            }
            return Some(next);
        }

        match generated {
            Some(original) if original.data.is_series() => {
                let mut next = original.clone();
                next.kind = kind;
                Some(next)
            }
            _ => None,
        }
    }
}

// ============================================================================
// Chart configuration (what the user asks for)
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfiguration {
    pub project_id: String,
    pub user_prompt: String,
    pub chart_type: Option<ChartKind>,
}

impl ChartConfiguration {
    pub fn is_valid(&self) -> bool {
        !self.project_id.is_empty() && self.chart_type.is_some() && !self.user_prompt.trim().is_empty()
    }
}

// ============================================================================
// Persisted chart
// ============================================================================

/// Saved chart as stored by the API. `query_data` and `chart_data` are JSON
/// documents serialized to strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub datasource_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub chart_name: String,
    #[serde(default)]
    pub chart_type: ChartKind,
    #[serde(default)]
    pub x_axis: String,
    #[serde(default)]
    pub y_axis: String,
    #[serde(default)]
    pub query_data: String,
    #[serde(default)]
    pub chart_data: String,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub sql: String,
    #[serde(default, skip_serializing)]
    pub created_at: Option<String>,
}

impl ChartInfo {
    /// Draft built from the preview; ownership fields are filled in on save.
    pub fn from_result(result: &ChartResult) -> Result<Self, String> {
        let chart_data = serde_json::to_string(&result.data)
            .map_err(|e| format!("Failed to serialize chart data: {}", e))?;
        Ok(Self {
            chart_name: result.title.clone(),
            chart_type: result.kind,
            x_axis: result.x_axis.clone(),
            y_axis: result.y_axis.clone(),
            chart_data,
            ..Default::default()
        })
    }

    pub fn to_result(&self) -> Result<ChartResult, String> {
        let data: ChartData = serde_json::from_str(&self.chart_data)
            .map_err(|e| format!("Failed to parse chart data: {}", e))?;
        Ok(ChartResult {
            x_axis: self.x_axis.clone(),
            y_axis: self.y_axis.clone(),
            title: self.chart_name.clone(),
            kind: self.chart_type,
            data,
        })
    }

    pub fn query_records(&self) -> Result<Vec<Document>, String> {
        if self.query_data.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&self.query_data).map_err(|e| format!("Failed to parse query data: {}", e))
    }

    /// Rows shown in the "view data" modal: chart records, or the raw query
    /// rows for number charts.
    pub fn data_view_records(&self) -> Result<Vec<Document>, String> {
        if self.chart_type == ChartKind::Number {
            return self.query_records();
        }
        match serde_json::from_str::<ChartData>(&self.chart_data)
            .map_err(|e| format!("Failed to parse chart data: {}", e))?
        {
            ChartData::Records(records) => Ok(records),
            ChartData::Numbers(values) => Ok(values
                .into_iter()
                .map(|v| {
                    let mut row = Document::new();
                    row.insert(self.y_axis.clone(), serde_json::json!(v));
                    row
                })
                .collect()),
            ChartData::Number(_) => self.query_records(),
        }
    }
}

// ============================================================================
// AI chart generation response
// ============================================================================

/// Payload of `generateChart`, itself delivered as a JSON string.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedChart {
    #[serde(default)]
    pub sql: String,
    pub prompt_result: PromptResult,
    #[serde(default)]
    pub query_result: Vec<Document>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PromptResult {
    pub input: PromptResultInput,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptResultInput {
    pub chart: ChartResult,
    pub chart_type: ChartKind,
}

impl GeneratedChart {
    pub fn parse(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|e| format!("Failed to parse generated chart: {}", e))
    }

    pub fn chart(&self) -> ChartResult {
        let mut chart = self.prompt_result.input.chart.clone();
        chart.kind = self.prompt_result.input.chart_type;
        chart
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(month: &str, revenue: serde_json::Value) -> Document {
        let mut d = Document::new();
        d.insert("month".into(), json!(month));
        d.insert("revenue".into(), revenue);
        d
    }

    fn bar_chart() -> ChartResult {
        ChartResult {
            x_axis: "month".into(),
            y_axis: "revenue".into(),
            title: "Revenue".into(),
            kind: ChartKind::Bar,
            data: ChartData::Records(vec![
                record("Jan", json!(10)),
                record("Feb", json!("5.5")),
                record("Mar", json!(null)),
            ]),
        }
    }

    #[test]
    fn test_chart_kind_names() {
        assert_eq!(ChartKind::from_name("PIE"), ChartKind::Pie);
        assert_eq!(ChartKind::from_name("column"), ChartKind::Bar);
        let kind: ChartKind = serde_json::from_str("\"line\"").unwrap();
        assert_eq!(kind, ChartKind::Line);
        assert_eq!(serde_json::to_string(&ChartKind::Number).unwrap(), "\"number\"");
    }

    #[test]
    fn test_total_and_series() {
        let chart = bar_chart();
        assert_eq!(chart.total(), 15.5);
        assert_eq!(
            chart.series(),
            vec![("Jan".to_string(), 10.0), ("Feb".to_string(), 5.5)]
        );
    }

    #[test]
    fn test_chart_data_untagged() {
        let n: ChartData = serde_json::from_str("42").unwrap();
        assert_eq!(n, ChartData::Number(42.0));
        let s: ChartData = serde_json::from_str("[1, 2.5]").unwrap();
        assert_eq!(s, ChartData::Numbers(vec![1.0, 2.5]));
        let r: ChartData = serde_json::from_str(r#"[{"a": 1}]"#).unwrap();
        assert!(matches!(r, ChartData::Records(ref v) if v.len() == 1));
    }

    #[test]
    fn test_switch_to_number_collapses_total() {
        let chart = bar_chart();
        let next = chart.switch_kind(Some(&chart), ChartKind::Number).unwrap();
        assert_eq!(next.kind, ChartKind::Number);
        assert_eq!(next.data, ChartData::Number(15.5));
    }

    #[test]
    fn test_switch_from_number_restores_series() {
        let generated = bar_chart();
        let number = generated.switch_kind(Some(&generated), ChartKind::Number).unwrap();
        let line = number.switch_kind(Some(&generated), ChartKind::Line).unwrap();
        assert_eq!(line.kind, ChartKind::Line);
        assert_eq!(line.data, generated.data);
    }

    #[test]
    fn test_switch_to_pie_is_ignored() {
        let chart = bar_chart();
        assert!(chart.switch_kind(Some(&chart), ChartKind::Pie).is_none());
    }

    #[test]
    fn test_configuration_validity() {
        let mut config = ChartConfiguration {
            project_id: "shop".into(),
            user_prompt: "  ".into(),
            chart_type: Some(ChartKind::Bar),
        };
        assert!(!config.is_valid());
        config.user_prompt = "monthly revenue".into();
        assert!(config.is_valid());
        config.chart_type = None;
        assert!(!config.is_valid());
    }

    #[test]
    fn test_chart_info_roundtrip_through_result() {
        let chart = bar_chart();
        let info = ChartInfo::from_result(&chart).unwrap();
        assert_eq!(info.chart_name, "Revenue");
        assert_eq!(info.to_result().unwrap(), chart);
    }

    #[test]
    fn test_data_view_records_for_number_chart_uses_query_data() {
        let info = ChartInfo {
            chart_type: ChartKind::Number,
            chart_data: "15.5".into(),
            query_data: r#"[{"revenue": 15.5}]"#.into(),
            ..Default::default()
        };
        let rows = info.data_view_records().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["revenue"], json!(15.5));
    }

    #[test]
    fn test_generated_chart_parse() {
        let raw = r#"{
            "sql": "SELECT month, revenue\nFROM sales",
            "promptResult": {"input": {"chartType": "line", "chart": {
                "xAxis": "month", "yAxis": "revenue", "title": "Revenue",
                "data": [{"month": "Jan", "revenue": 3}]
            }}},
            "queryResult": [{"month": "Jan", "revenue": 3}]
        }"#;
        let generated = GeneratedChart::parse(raw).unwrap();
        let chart = generated.chart();
        assert_eq!(chart.kind, ChartKind::Line);
        assert_eq!(chart.total(), 3.0);
        assert_eq!(generated.query_result.len(), 1);
    }
}
