//! Quote request input model
//!
//! A quote request is the full input snapshot for one quote: the client, the
//! selected services, the payment method for the due-now amount, optional
//! recurring-payment terms and optional transport. The engine builds exactly
//! one quote per request snapshot; nothing downstream re-reads these inputs.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::client::ClientInfo;
use super::payment::{PaymentMethod, RecurringPayment};
use super::service::SelectedService;
use super::transport::TransportInfo;
use crate::error::{QuoteError, QuoteResult};

/// Input snapshot for a single quote
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Client identification
    #[serde(default)]
    pub client: ClientInfo,

    /// Selected services
    #[serde(default)]
    pub services: Vec<SelectedService>,

    /// Payment method for the due-now amount
    #[serde(default)]
    pub payment: PaymentMethod,

    /// Recurring payment terms (only meaningful with recurring services)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring: Option<RecurringPayment>,

    /// Transport cost
    #[serde(default)]
    pub transport: TransportInfo,
}

impl QuoteRequest {
    /// Load a request from a JSON or YAML file, by extension
    pub fn load(path: &Path) -> QuoteResult<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| QuoteError::Io(format!("Failed to read request file: {}", e)))?;

        let request: QuoteRequest = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&contents)?,
            _ => serde_json::from_str(&contents)?,
        };

        request.validate()?;
        Ok(request)
    }

    /// Whether any selected service has a non-zero monthly price
    pub fn has_recurring_services(&self) -> bool {
        self.services.iter().any(|s| !s.prices.monthly.is_zero())
    }

    /// Validate the whole request at the input boundary
    ///
    /// Invalid inputs are caught here so they surface as validation messages,
    /// not as errors thrown during rendering.
    pub fn validate(&self) -> QuoteResult<()> {
        for service in &self.services {
            service.validate()?;
        }
        self.transport.validate()?;
        if let Some(recurring) = &self.recurring {
            recurring.validate()?;
        }
        Ok(())
    }
}
