pub mod a001_datasource;
pub mod a002_chart;
