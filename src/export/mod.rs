//! Export module for quote-cli
//!
//! Produces the deliverable renderings of a quote:
//! - Document: the formatted text document handed to the client
//! - JSON: machine-readable quote snapshot with schema versioning
//! - YAML: human-readable quote snapshot

pub mod document;
pub mod json;
pub mod yaml;

pub use document::format_document;
pub use json::{export_quote_json, QuoteExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_quote_yaml;
