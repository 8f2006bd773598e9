//! Data models: extracted facts and configuration.

pub mod config;
pub mod facts;
