//! Output formatters for reports

pub mod json;
pub mod text;

pub use json::to_json;
pub use text::{config_listing, section_text, to_text};
