pub mod components;
pub mod config;
pub mod events;
pub mod graphql;
pub mod icons;
pub mod modal;
pub mod storage;
pub mod toast;
