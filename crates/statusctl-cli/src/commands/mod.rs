//! CLI command handlers

pub mod list;
pub mod run;
