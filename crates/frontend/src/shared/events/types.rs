use contracts::domain::a001_datasource::aggregate::PostgresqlDatasource;
use contracts::domain::a002_chart::aggregate::{ChartConfiguration, ChartInfo, ChartResult};
use std::fmt;

use crate::shared::toast::Toast;

/// Channels of the event bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    ToastMessage,
    DatasourceTest,
    DatasourceSave,
    CloseDatasourceModal,
    GenerateChart,
    SaveChart,
    ChartChange,
}

impl EventType {
    pub fn name(&self) -> &'static str {
        match self {
            EventType::ToastMessage => "toast.message",
            EventType::DatasourceTest => "postgresql.datasource.test",
            EventType::DatasourceSave => "postgresql.datasource.save",
            EventType::CloseDatasourceModal => "close.datasource.modal",
            EventType::GenerateChart => "generate.chart",
            EventType::SaveChart => "save.chart",
            EventType::ChartChange => "chart.change",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An event together with its payload.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Full current toast list.
    ToastMessage(Vec<Toast>),
    DatasourceTest(PostgresqlDatasource),
    DatasourceSave(PostgresqlDatasource),
    /// `true` when the data source list should be reloaded.
    CloseDatasourceModal(bool),
    GenerateChart(ChartConfiguration),
    SaveChart(ChartInfo),
    ChartChange(ChartResult),
}

impl AppEvent {
    pub fn event_type(&self) -> EventType {
        match self {
            AppEvent::ToastMessage(_) => EventType::ToastMessage,
            AppEvent::DatasourceTest(_) => EventType::DatasourceTest,
            AppEvent::DatasourceSave(_) => EventType::DatasourceSave,
            AppEvent::CloseDatasourceModal(_) => EventType::CloseDatasourceModal,
            AppEvent::GenerateChart(_) => EventType::GenerateChart,
            AppEvent::SaveChart(_) => EventType::SaveChart,
            AppEvent::ChartChange(_) => EventType::ChartChange,
        }
    }
}
