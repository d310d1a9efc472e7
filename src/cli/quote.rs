//! Quote CLI command handlers
//!
//! Bridges the clap argument parsing with the engine and presentation
//! layers. Each command parses the request file once, builds a single quote
//! snapshot and hands it to the relevant adapter, so no surface can render
//! from a different set of inputs than another.

use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::ValueEnum;

use crate::config::{QuotePaths, Settings};
use crate::display::format_summary;
use crate::engine::Quote;
use crate::error::{QuoteError, QuoteResult};
use crate::export::{export_quote_json, export_quote_yaml, format_document};
use crate::messages::{
    format_email_body, format_whatsapp_message, mailto_link, whatsapp_link, MessageOptions,
};
use crate::models::{Catalog, QuoteRequest};

/// Outbound message channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MessageChannel {
    Whatsapp,
    Email,
}

/// Quote export format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Yaml,
}

/// Parse a request file and compute its quote snapshot
///
/// The generation timestamp is captured here, once, and covers every surface
/// rendered from this quote.
pub fn build_quote(file: &Path, settings: &Settings, catalog: &Catalog) -> QuoteResult<Quote> {
    let request = QuoteRequest::load(file)?;
    Quote::build(
        &request,
        catalog,
        &settings.rate_table()?,
        settings.validity_days,
        Utc::now(),
    )
}

/// Print the on-screen summary
pub fn handle_summary(file: &Path, settings: &Settings, catalog: &Catalog) -> QuoteResult<()> {
    let quote = build_quote(file, settings, catalog)?;
    print!("{}", format_summary(&quote));
    Ok(())
}

/// Render the formatted document, to stdout or a file
pub fn handle_document(
    file: &Path,
    output: Option<&Path>,
    settings: &Settings,
    catalog: &Catalog,
) -> QuoteResult<()> {
    let quote = build_quote(file, settings, catalog)?;
    let document = format_document(&quote, catalog, settings);

    match output {
        Some(path) => {
            std::fs::write(path, document)
                .map_err(|e| QuoteError::Io(format!("Failed to write document: {}", e)))?;
            println!("Document written to {}", path.display());
        }
        None => print!("{}", document),
    }
    Ok(())
}

/// Print a message draft, or the encoded outbound link
pub fn handle_message(
    file: &Path,
    channel: MessageChannel,
    link: bool,
    settings: &Settings,
    catalog: &Catalog,
) -> QuoteResult<()> {
    let quote = build_quote(file, settings, catalog)?;
    let options = MessageOptions {
        include_payment_details: settings.include_payment_in_messages,
    };

    let output = match (channel, link) {
        (MessageChannel::Whatsapp, false) => format_whatsapp_message(&quote, &options),
        (MessageChannel::Whatsapp, true) => {
            whatsapp_link(&quote, &options, &settings.company.whatsapp)?
        }
        (MessageChannel::Email, false) => {
            format_email_body(&quote, &options, &settings.company.name)
        }
        (MessageChannel::Email, true) => mailto_link(
            &quote,
            &options,
            &settings.company.email,
            &settings.company.name,
        )?,
    };

    println!("{}", output);
    Ok(())
}

/// Serialize the quote snapshot, to stdout or a file
pub fn handle_export(
    file: &Path,
    format: ExportFormat,
    output: Option<&Path>,
    settings: &Settings,
    catalog: &Catalog,
) -> QuoteResult<()> {
    let quote = build_quote(file, settings, catalog)?;

    let mut buffer = Vec::new();
    match format {
        ExportFormat::Json => export_quote_json(&quote, &mut buffer)?,
        ExportFormat::Yaml => export_quote_yaml(&quote, &mut buffer)?,
    }

    match output {
        Some(path) => {
            std::fs::write(path, buffer)
                .map_err(|e| QuoteError::Io(format!("Failed to write export: {}", e)))?;
            println!("Quote exported to {}", path.display());
        }
        None => {
            let text = String::from_utf8(buffer)
                .map_err(|e| QuoteError::Export(format!("Export is not valid UTF-8: {}", e)))?;
            print!("{}", text);
        }
    }
    Ok(())
}

/// Example request file written by `quote init`
const EXAMPLE_REQUEST: &str = r#"# quote-cli request file
# All amounts are integer centavos (R$ 100,00 = 10000).
client:
  business_name: Padaria Central
  contact_name: Maria
  whatsapp: "+55 11 90000-0000"
services:
  - category: design
    name: Brand identity
    prices:
      entry: 10000
      monthly: 5000
    options:
      revisions: "3"
  - category: paid-traffic
    name: Ads management
    prices:
      monthly: 30000
# Payment for the due-now amount: instant-transfer or credit-card (1-12x).
payment:
  type: credit-card
  installments: 3
# Recurring terms apply only when a service has a monthly price.
recurring:
  method: bank-slip
  due_day: 10
transport:
  cost: 5000
  days: 3
"#;

/// Write a commented example request file
pub fn handle_init(file: &Path) -> QuoteResult<()> {
    if file.exists() {
        return Err(QuoteError::Validation(format!(
            "Refusing to overwrite existing file: {}",
            file.display()
        )));
    }

    std::fs::write(file, EXAMPLE_REQUEST)
        .map_err(|e| QuoteError::Io(format!("Failed to write example request: {}", e)))?;
    println!("Example request written to {}", file.display());
    Ok(())
}

/// Show resolved paths and effective settings
pub fn handle_config(paths: &QuotePaths, settings: &Settings) -> QuoteResult<()> {
    println!("Config directory: {}", paths.base_dir().display());
    println!(
        "Settings file: {} ({})",
        paths.settings_file().display(),
        if paths.is_initialized() {
            "present"
        } else {
            "defaults"
        }
    );
    println!(
        "Catalog file: {} ({})",
        paths.catalog_file().display(),
        if paths.catalog_file().exists() {
            "present"
        } else {
            "built-in catalog"
        }
    );
    println!("Company: {}", settings.company.name);
    println!("Validity window: {} days", settings.validity_days);
    println!(
        "Messages include payment detail: {}",
        settings.include_payment_in_messages
    );
    println!(
        "Card rates (1x..12x): {}",
        settings
            .card_rates
            .iter()
            .map(|p| format!("{}%", p))
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(())
}

/// Resolve the catalog: user override file when present, built-in otherwise
pub fn load_catalog(paths: &QuotePaths) -> QuoteResult<Catalog> {
    let catalog_file: PathBuf = paths.catalog_file();
    if catalog_file.exists() {
        Catalog::load(&catalog_file)
    } else {
        Ok(Catalog::builtin())
    }
}
