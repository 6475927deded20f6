//! Data models: output rows, configuration and keyword lists.

pub mod config;
pub mod embedded;
pub mod keywords;
pub mod row;
