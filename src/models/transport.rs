//! Transport cost model
//!
//! Transport is billed as a per-day rate times a number of days. The total
//! contributes to the due-now amount only, never to the monthly recurring
//! amount.

use serde::{Deserialize, Serialize};

use super::money::Money;
use crate::error::{QuoteError, QuoteResult};

/// Ancillary transport cost for on-site work
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportInfo {
    /// Per-day rate
    pub cost: Money,

    /// Number of days
    pub days: u32,
}

impl TransportInfo {
    /// Total transport contribution (cost x days)
    pub fn total(&self) -> Money {
        self.cost * self.days
    }

    /// Validate that the per-day rate is not negative
    pub fn validate(&self) -> QuoteResult<()> {
        if self.cost.is_negative() {
            return Err(QuoteError::negative_amount("transport.cost", self.cost));
        }
        Ok(())
    }

    /// Label for display: "1 day" / "N days"
    pub fn days_label(&self) -> String {
        if self.days == 1 {
            "1 day".to_string()
        } else {
            format!("{} days", self.days)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total() {
        let transport = TransportInfo {
            cost: Money::from_cents(5000),
            days: 3,
        };
        assert_eq!(transport.total().cents(), 15000);

        assert_eq!(TransportInfo::default().total(), Money::zero());
    }

    #[test]
    fn test_validate_rejects_negative_cost() {
        let transport = TransportInfo {
            cost: Money::from_cents(-1),
            days: 1,
        };
        assert!(transport.validate().unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_days_label() {
        let one = TransportInfo {
            cost: Money::zero(),
            days: 1,
        };
        let three = TransportInfo {
            cost: Money::zero(),
            days: 3,
        };
        assert_eq!(one.days_label(), "1 day");
        assert_eq!(three.days_label(), "3 days");
    }

    #[test]
    fn test_absent_fields_default_to_zero() {
        let transport: TransportInfo = serde_json::from_str("{}").unwrap();
        assert_eq!(transport.cost, Money::zero());
        assert_eq!(transport.days, 0);
    }
}
