//! YAML quote export
//!
//! Human-readable variant of the JSON export; same versioned envelope.

use std::io::Write;

use crate::engine::Quote;
use crate::error::{QuoteError, QuoteResult};

use super::json::QuoteExport;

/// Write a quote as YAML
pub fn export_quote_yaml<W: Write>(quote: &Quote, mut writer: W) -> QuoteResult<()> {
    let export = QuoteExport::new(quote.clone());
    let yaml = serde_yaml::to_string(&export)?;
    writer
        .write_all(yaml.as_bytes())
        .map_err(|e| QuoteError::Export(format!("Failed to write YAML export: {}", e)))?;
    Ok(())
}
