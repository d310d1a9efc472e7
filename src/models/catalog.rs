//! Service catalog lookup
//!
//! The catalog maps category ids to display names and a paid-traffic flag.
//! Whether a category counts as advertising spend is data on the entry, not a
//! hardcoded id comparison, so classification has a single data dependency.
//!
//! Lookups fail soft: an unrecognized id classifies as non-advertising and
//! displays under its raw id.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{QuoteError, QuoteResult};

/// A catalog entry for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry {
    /// Display name
    pub name: String,

    /// Whether monthly amounts in this category are advertising spend
    #[serde(default)]
    pub is_paid_traffic: bool,
}

/// Category id -> metadata lookup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: BTreeMap<String, CategoryEntry>,
}

impl Catalog {
    /// The built-in agency service catalog
    pub fn builtin() -> Self {
        let mut entries = BTreeMap::new();
        let mut add = |id: &str, name: &str, is_paid_traffic: bool| {
            entries.insert(
                id.to_string(),
                CategoryEntry {
                    name: name.to_string(),
                    is_paid_traffic,
                },
            );
        };

        add("design", "Design", false);
        add("social-media", "Social Media", false);
        add("paid-traffic", "Paid Traffic", true);
        add("web", "Web Development", false);
        add("seo", "SEO", false);
        add("audiovisual", "Audiovisual Production", false);

        Self { entries }
    }

    /// Load a catalog from a JSON or YAML file, by extension
    pub fn load(path: &std::path::Path) -> QuoteResult<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| QuoteError::Io(format!("Failed to read catalog file: {}", e)))?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&contents)?),
            _ => Ok(serde_json::from_str(&contents)?),
        }
    }

    /// Look up a category entry by id
    pub fn get(&self, id: &str) -> Option<&CategoryEntry> {
        self.entries.get(id)
    }

    /// Classify a category as paid traffic; unknown ids are not paid traffic
    pub fn is_paid_traffic(&self, id: &str) -> bool {
        self.get(id).map(|e| e.is_paid_traffic).unwrap_or(false)
    }

    /// Display label for a category; unknown ids fall back to the raw id
    pub fn label<'a>(&'a self, id: &'a str) -> &'a str {
        self.get(id).map(|e| e.name.as_str()).unwrap_or(id)
    }
}
