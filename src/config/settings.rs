//! User settings for quote-cli
//!
//! Manages user preferences: quote validity window, company identity for
//! document and message footers, the card-installment surcharge schedule,
//! and whether outbound message drafts include payment detail.

use serde::{Deserialize, Serialize};

use super::paths::QuotePaths;
use crate::engine::{RateTable, DEFAULT_RATE_PERCENTAGES};
use crate::error::{QuoteError, QuoteResult};

/// Company identity shown in document and message footers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyInfo {
    /// Company display name
    pub name: String,

    /// Contact e-mail (also the default mailto recipient)
    pub email: String,

    /// WhatsApp number in international digits (default wa.me target)
    pub whatsapp: String,

    /// Postal address line for the document footer
    pub address: String,
}

impl Default for CompanyInfo {
    fn default() -> Self {
        Self {
            name: "My Agency".to_string(),
            email: String::new(),
            whatsapp: String::new(),
            address: String::new(),
        }
    }
}

/// User settings for quote-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Quote validity window in days
    #[serde(default = "default_validity_days")]
    pub validity_days: i64,

    /// Date format for rendered dates (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Whether chat/e-mail drafts include fee and installment figures
    ///
    /// Off by default: the drafts lead with totals only, leaving surcharge
    /// detail for the follow-up conversation.
    #[serde(default)]
    pub include_payment_in_messages: bool,

    /// Card surcharge schedule, percent for 1x..12x
    #[serde(default = "default_card_rates")]
    pub card_rates: Vec<f64>,

    /// Company identity
    #[serde(default)]
    pub company: CompanyInfo,
}

fn default_schema_version() -> u32 {
    1
}

fn default_validity_days() -> i64 {
    10
}

fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}

fn default_card_rates() -> Vec<f64> {
    DEFAULT_RATE_PERCENTAGES.to_vec()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            validity_days: default_validity_days(),
            date_format: default_date_format(),
            include_payment_in_messages: false,
            card_rates: default_card_rates(),
            company: CompanyInfo::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &QuotePaths) -> QuoteResult<Self> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| QuoteError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| QuoteError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Create default settings
            let settings = Settings::default();
            // Don't save yet - let caller decide when to persist
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &QuotePaths) -> QuoteResult<()> {
        // Ensure the config directory exists
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| QuoteError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| QuoteError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Build the validated surcharge table from the configured schedule
    pub fn rate_table(&self) -> QuoteResult<RateTable> {
        RateTable::from_percentages(&self.card_rates)
    }
}
