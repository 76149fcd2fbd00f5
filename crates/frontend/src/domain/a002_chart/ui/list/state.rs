use contracts::domain::a002_chart::aggregate::{ChartInfo, ChartKind};
use contracts::shared::Document;
use leptos::prelude::*;

/// Chart-type filter pills above the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartFilter {
    #[default]
    All,
    Kind(ChartKind),
}

impl ChartFilter {
    pub fn options() -> Vec<ChartFilter> {
        std::iter::once(ChartFilter::All)
            .chain(ChartKind::all().into_iter().map(ChartFilter::Kind))
            .collect()
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartFilter::All => "All",
            ChartFilter::Kind(kind) => kind.display_name(),
        }
    }

    pub fn matches(&self, chart: &ChartInfo) -> bool {
        match self {
            ChartFilter::All => true,
            ChartFilter::Kind(kind) => chart.chart_type == *kind,
        }
    }
}

/// Rows behind a chart, shown in the data modal.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDataView {
    pub title: String,
    pub rows: Vec<Document>,
}

#[derive(Clone, Debug, Default)]
pub struct ChartListState {
    pub charts: Vec<ChartInfo>,
    pub filter: ChartFilter,
    pub is_loaded: bool,
    pub data_view: Option<ChartDataView>,
}

impl ChartListState {
    pub fn visible(&self) -> Vec<ChartInfo> {
        self.charts
            .iter()
            .filter(|c| self.filter.matches(c))
            .cloned()
            .collect()
    }

    pub fn remove(&mut self, chart_id: &str) {
        self.charts.retain(|c| c.id.as_deref() != Some(chart_id));
    }
}

pub fn create_state() -> RwSignal<ChartListState> {
    RwSignal::new(ChartListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart(id: &str, kind: ChartKind) -> ChartInfo {
        ChartInfo {
            id: Some(id.into()),
            chart_type: kind,
            ..Default::default()
        }
    }

    fn sample() -> ChartListState {
        ChartListState {
            charts: vec![
                chart("1", ChartKind::Bar),
                chart("2", ChartKind::Pie),
                chart("3", ChartKind::Bar),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_filter_options_order() {
        let labels: Vec<&str> = ChartFilter::options().iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["All", "Number", "Bar", "Line", "Pie"]);
    }

    #[test]
    fn test_visible_respects_filter() {
        let mut state = sample();
        assert_eq!(state.visible().len(), 3);

        state.filter = ChartFilter::Kind(ChartKind::Bar);
        let ids: Vec<_> = state.visible().into_iter().filter_map(|c| c.id).collect();
        assert_eq!(ids, vec!["1", "3"]);

        state.filter = ChartFilter::Kind(ChartKind::Line);
        assert!(state.visible().is_empty());
    }

    #[test]
    fn test_remove_keeps_filter() {
        let mut state = sample();
        state.filter = ChartFilter::Kind(ChartKind::Bar);
        state.remove("1");
        assert_eq!(state.charts.len(), 2);
        assert_eq!(state.visible().len(), 1);
        assert_eq!(state.filter, ChartFilter::Kind(ChartKind::Bar));
    }
}
