pub mod creation;
pub mod list;
