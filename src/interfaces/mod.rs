//! Inbound and outbound adapters of the CLI: script parsing, screen
//! rendering and the JSON session report.

pub mod csv;
pub mod json;
pub mod screen;
