pub mod dashboard;
mod data_sidebar;
mod prompt_editor;
mod result_table;
mod sql_editor;

pub use dashboard::QueryDashboard;
