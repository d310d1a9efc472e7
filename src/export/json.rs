//! JSON quote export
//!
//! Serializes the full quote snapshot with schema versioning, so downstream
//! tooling can detect format changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::engine::Quote;
use crate::error::{QuoteError, QuoteResult};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Versioned envelope around an exported quote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// The computed quote snapshot
    pub quote: Quote,
}

impl QuoteExport {
    /// Wrap a quote in the export envelope
    pub fn new(quote: Quote) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            quote,
        }
    }
}

/// Write a quote as pretty-printed JSON
pub fn export_quote_json<W: Write>(quote: &Quote, mut writer: W) -> QuoteResult<()> {
    let export = QuoteExport::new(quote.clone());
    let json = serde_json::to_string_pretty(&export)?;
    writer
        .write_all(json.as_bytes())
        .map_err(|e| QuoteError::Export(format!("Failed to write JSON export: {}", e)))?;
    writer
        .write_all(b"\n")
        .map_err(|e| QuoteError::Export(format!("Failed to write JSON export: {}", e)))?;
    Ok(())
}
