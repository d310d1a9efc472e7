//! Selected service model
//!
//! A selected service is a snapshot of a catalog item at quote time: the
//! category it belongs to, its display name, a three-part price breakdown and
//! a free-form option map. Selections are immutable once added; changing one
//! means removing it and adding a replacement.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::money::Money;
use crate::error::{QuoteError, QuoteResult};

/// The three independent price components a service can carry
///
/// Any subset may be zero; a service may charge an entry fee and a monthly
/// fee at the same time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceBreakdown {
    /// One-time fee, due with the first payment
    pub one_time: Money,

    /// Entry (down-payment) fee, due with the first payment
    pub entry: Money,

    /// Recurring monthly fee
    pub monthly: Money,
}

impl PriceBreakdown {
    /// The portion of this breakdown due immediately (entry + one-time)
    pub fn due_now(&self) -> Money {
        self.entry + self.one_time
    }

    /// Validate that no price component is negative
    pub fn validate(&self) -> QuoteResult<()> {
        if self.one_time.is_negative() {
            return Err(QuoteError::negative_amount("prices.one_time", self.one_time));
        }
        if self.entry.is_negative() {
            return Err(QuoteError::negative_amount("prices.entry", self.entry));
        }
        if self.monthly.is_negative() {
            return Err(QuoteError::negative_amount("prices.monthly", self.monthly));
        }
        Ok(())
    }
}

/// A display-only option value: a single scalar or a list of scalars
///
/// Options never participate in any arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Scalar(String),
    List(Vec<String>),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Scalar(v) => write!(f, "{}", v),
            OptionValue::List(vs) => write!(f, "{}", vs.join(", ")),
        }
    }
}

/// A chosen catalog item at quote time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectedService {
    /// Catalog category identifier (string key)
    pub category: String,

    /// Display label
    pub name: String,

    /// Price breakdown
    #[serde(default)]
    pub prices: PriceBreakdown,

    /// Free-form options (display-only)
    #[serde(default)]
    pub options: BTreeMap<String, OptionValue>,
}

impl SelectedService {
    /// Create a new selected service with no options
    pub fn new(category: impl Into<String>, name: impl Into<String>, prices: PriceBreakdown) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
            prices,
            options: BTreeMap::new(),
        }
    }

    /// Add a scalar option (builder-style, for tests and programmatic use)
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options
            .insert(key.into(), OptionValue::Scalar(value.into()));
        self
    }

    /// Validate the service entry
    pub fn validate(&self) -> QuoteResult<()> {
        if self.name.trim().is_empty() {
            return Err(QuoteError::Validation("Service name cannot be empty".into()));
        }
        self.prices.validate()
    }

    /// Format the option map as a single "key: value | key: value" line
    ///
    /// Returns None when there are no options.
    pub fn options_line(&self) -> Option<String> {
        if self.options.is_empty() {
            return None;
        }
        Some(
            self.options
                .iter()
                .map(|(k, v)| format!("{}: {}", k, v))
                .collect::<Vec<_>>()
                .join(" | "),
        )
    }
}
