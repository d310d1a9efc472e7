//! Payment method and recurring payment models
//!
//! The payment method covers the due-now amount only. Recurring monthly
//! obligations are collected separately and carry no card surcharge; the
//! recurring terms are informational and never change the totals.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{QuoteError, QuoteResult};

/// How the due-now amount will be paid
///
/// Instant transfer is definitionally a single payment, so the installment
/// count only exists on the credit-card variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PaymentMethod {
    /// Instant bank transfer (Pix), no surcharge
    InstantTransfer,

    /// Credit card, 1-12 installments under the card network's rate table
    CreditCard {
        #[serde(default = "default_installments")]
        installments: u8,
    },
}

fn default_installments() -> u8 {
    1
}

impl PaymentMethod {
    /// Number of payments the due-now amount is split into
    pub fn installments(&self) -> u8 {
        match self {
            PaymentMethod::InstantTransfer => 1,
            PaymentMethod::CreditCard { installments } => *installments,
        }
    }

    /// Whether an installment breakdown should be shown (credit, more than 1x)
    pub fn is_installment_plan(&self) -> bool {
        matches!(self, PaymentMethod::CreditCard { installments } if *installments > 1)
    }
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::InstantTransfer
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::InstantTransfer => write!(f, "Pix (no surcharge)"),
            PaymentMethod::CreditCard { installments: 1 } => {
                write!(f, "Credit card, single payment")
            }
            PaymentMethod::CreditCard { installments } => {
                write!(f, "Credit card in {}x", installments)
            }
        }
    }
}

/// How monthly obligations will be collected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecurringMethod {
    /// Instant bank transfer (Pix)
    InstantTransfer,
    /// Bank slip (boleto)
    BankSlip,
    /// Credit card (no surcharge on recurring charges)
    CreditCard,
}

impl fmt::Display for RecurringMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecurringMethod::InstantTransfer => write!(f, "Pix"),
            RecurringMethod::BankSlip => write!(f, "bank slip"),
            RecurringMethod::CreditCard => write!(f, "credit card"),
        }
    }
}

/// Allowed monthly due days
pub const RECURRING_DUE_DAYS: [u8; 5] = [5, 10, 15, 20, 25];

/// Recurring payment terms for monthly obligations
///
/// Only meaningful when the selection contains at least one service with a
/// non-zero monthly price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringPayment {
    /// Collection method
    pub method: RecurringMethod,

    /// Due day of the month (5, 10, 15, 20 or 25)
    pub due_day: u8,
}

impl RecurringPayment {
    /// Validate that the due day is one of the allowed days
    pub fn validate(&self) -> QuoteResult<()> {
        if !RECURRING_DUE_DAYS.contains(&self.due_day) {
            return Err(QuoteError::Validation(format!(
                "Invalid recurring due day: {} (allowed: 5, 10, 15, 20, 25)",
                self.due_day
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_installments() {
        assert_eq!(PaymentMethod::InstantTransfer.installments(), 1);
        assert_eq!(PaymentMethod::CreditCard { installments: 6 }.installments(), 6);
    }

    #[test]
    fn test_is_installment_plan() {
        assert!(!PaymentMethod::InstantTransfer.is_installment_plan());
        assert!(!PaymentMethod::CreditCard { installments: 1 }.is_installment_plan());
        assert!(PaymentMethod::CreditCard { installments: 3 }.is_installment_plan());
    }

    #[test]
    fn test_display() {
        assert_eq!(PaymentMethod::InstantTransfer.to_string(), "Pix (no surcharge)");
        assert_eq!(
            PaymentMethod::CreditCard { installments: 1 }.to_string(),
            "Credit card, single payment"
        );
        assert_eq!(
            PaymentMethod::CreditCard { installments: 12 }.to_string(),
            "Credit card in 12x"
        );
    }

    #[test]
    fn test_serde_tagged_form() {
        let m: PaymentMethod = serde_json::from_str(r#"{"type":"instant-transfer"}"#).unwrap();
        assert_eq!(m, PaymentMethod::InstantTransfer);

        let m: PaymentMethod =
            serde_json::from_str(r#"{"type":"credit-card","installments":3}"#).unwrap();
        assert_eq!(m, PaymentMethod::CreditCard { installments: 3 });

        // Installment count defaults to 1 when omitted
        let m: PaymentMethod = serde_json::from_str(r#"{"type":"credit-card"}"#).unwrap();
        assert_eq!(m, PaymentMethod::CreditCard { installments: 1 });
    }

    #[test]
    fn test_recurring_due_day_validation() {
        let ok = RecurringPayment {
            method: RecurringMethod::BankSlip,
            due_day: 10,
        };
        assert!(ok.validate().is_ok());

        let bad = RecurringPayment {
            method: RecurringMethod::BankSlip,
            due_day: 7,
        };
        assert!(bad.validate().unwrap_err().is_validation());
    }
}
