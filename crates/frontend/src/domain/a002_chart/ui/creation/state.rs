use contracts::domain::a002_chart::aggregate::{ChartInfo, ChartResult, GeneratedChart};
use contracts::shared::sql::collapse_whitespace;
use contracts::shared::Document;
use leptos::prelude::*;

/// Everything the creation page accumulates before a save.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartDraft {
    /// Id of the chart being edited; `None` when creating.
    pub chart_id: Option<String>,
    /// Chart as shown in the preview.
    pub chart: Option<ChartResult>,
    /// Chart as generated or loaded, before any type switch.
    pub generated: Option<ChartResult>,
    pub sql: String,
    pub prompt: String,
    pub query_data: Vec<Document>,
    pub is_loading: bool,
}

impl ChartDraft {
    pub fn apply_generated(&mut self, generated: GeneratedChart, prompt: &str) {
        let chart = generated.chart();
        self.chart = Some(chart.clone());
        self.generated = Some(chart);
        self.sql = collapse_whitespace(&generated.sql);
        self.prompt = prompt.to_string();
        self.query_data = generated.query_result;
    }

    /// Load a stored chart for editing.
    pub fn apply_saved(&mut self, info: &ChartInfo) -> Result<(), String> {
        let chart = info.to_result()?;
        self.query_data = info.query_records()?;
        self.chart_id = info.id.clone();
        self.chart = Some(chart.clone());
        self.generated = Some(chart);
        self.sql = collapse_whitespace(&info.sql);
        self.prompt = info.prompt.clone();
        Ok(())
    }

    /// Record sent to the API: the preview's `draft` plus ownership, the
    /// generating prompt and SQL, and the raw query rows.
    pub fn to_chart_info(
        &self,
        draft: ChartInfo,
        datasource_id: &str,
        user_id: &str,
    ) -> Result<ChartInfo, String> {
        let query_data = serde_json::to_string(&self.query_data)
            .map_err(|e| format!("Failed to serialize query data: {}", e))?;
        Ok(ChartInfo {
            id: self.chart_id.clone(),
            datasource_id: datasource_id.to_string(),
            user_id: user_id.to_string(),
            query_data,
            prompt: self.prompt.clone(),
            sql: self.sql.clone(),
            ..draft
        })
    }
}

pub fn create_state() -> RwSignal<ChartDraft> {
    RwSignal::new(ChartDraft::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_chart::aggregate::ChartKind;

    const GENERATED: &str = r#"{
        "sql": "SELECT month,\n   SUM(total) AS revenue\nFROM orders GROUP BY month",
        "promptResult": {"input": {"chart": {"xAxis": "month", "yAxis": "revenue", "title": "Revenue", "data": [{"month": "Jan", "revenue": 10}]}, "chartType": "line"}},
        "queryResult": [{"month": "Jan", "revenue": 10}]
    }"#;

    #[test]
    fn test_apply_generated() {
        let mut draft = ChartDraft::default();
        draft.apply_generated(GeneratedChart::parse(GENERATED).unwrap(), "monthly revenue");

        assert_eq!(draft.sql, "SELECT month, SUM(total) AS revenue FROM orders GROUP BY month");
        assert_eq!(draft.prompt, "monthly revenue");
        assert_eq!(draft.chart.as_ref().map(|c| c.kind), Some(ChartKind::Line));
        assert_eq!(draft.generated, draft.chart);
        assert_eq!(draft.query_data.len(), 1);
    }

    #[test]
    fn test_to_chart_info_fills_ownership() {
        let mut draft = ChartDraft::default();
        draft.apply_generated(GeneratedChart::parse(GENERATED).unwrap(), "monthly revenue");
        let preview = ChartInfo::from_result(draft.chart.as_ref().unwrap()).unwrap();

        let info = draft.to_chart_info(preview, "ds-1", "user-1").unwrap();
        assert_eq!(info.id, None);
        assert_eq!(info.datasource_id, "ds-1");
        assert_eq!(info.user_id, "user-1");
        assert_eq!(info.chart_name, "Revenue");
        assert_eq!(info.chart_type, ChartKind::Line);
        assert_eq!(info.query_data, r#"[{"month":"Jan","revenue":10}]"#);
        assert_eq!(info.prompt, "monthly revenue");
    }

    #[test]
    fn test_apply_saved_keeps_chart_id() {
        let saved = ChartInfo {
            id: Some("c1".into()),
            chart_name: "Orders".into(),
            chart_type: ChartKind::Number,
            chart_data: "42".into(),
            query_data: r#"[{"count":42}]"#.into(),
            sql: "SELECT\n count(*)  FROM orders".into(),
            prompt: "how many orders".into(),
            ..Default::default()
        };
        let mut draft = ChartDraft::default();
        draft.apply_saved(&saved).unwrap();

        assert_eq!(draft.chart_id.as_deref(), Some("c1"));
        assert_eq!(draft.sql, "SELECT count(*) FROM orders");
        assert_eq!(draft.chart.as_ref().map(|c| c.total()), Some(42.0));

        let info = draft
            .to_chart_info(ChartInfo::from_result(draft.chart.as_ref().unwrap()).unwrap(), "ds", "u")
            .unwrap();
        assert_eq!(info.id.as_deref(), Some("c1"));
    }

    #[test]
    fn test_apply_saved_rejects_broken_chart_data() {
        let saved = ChartInfo {
            chart_data: "{not json".into(),
            ..Default::default()
        };
        let mut draft = ChartDraft::default();
        assert!(draft.apply_saved(&saved).is_err());
        assert!(draft.chart.is_none());
    }
}
