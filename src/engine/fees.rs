//! Payment fee calculation
//!
//! Applies the card network's installment surcharge to the due-now amount.
//! The rate table is a configuration artifact: the engine applies it, it does
//! not define its values. Rates are held in basis points so the surcharge
//! math stays in integer centavos.

use serde::{Deserialize, Serialize};

use crate::error::{QuoteError, QuoteResult};
use crate::models::{Money, PaymentMethod};

/// Maximum installment count accepted by the card network
pub const MAX_INSTALLMENTS: u8 = 12;

/// Default surcharge schedule, percent per installment count (1x..12x)
///
/// Mirrors the card network's published schedule: monotonically
/// non-decreasing, 1x smallest.
pub const DEFAULT_RATE_PERCENTAGES: [f64; 12] = [
    2.99, 4.59, 5.19, 5.79, 6.39, 6.99, 7.59, 8.19, 8.79, 9.39, 9.99, 10.59,
];

/// Card-installment surcharge table, keys 1..12
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    /// Surcharge in basis points, indexed by installments - 1
    basis_points: [u32; 12],
}

impl RateTable {
    /// Build a table from percentages for 1x..12x
    ///
    /// Percentages must be non-negative and monotonically non-decreasing in
    /// the installment count; a higher count never carries a smaller
    /// surcharge.
    pub fn from_percentages(percentages: &[f64]) -> QuoteResult<Self> {
        if percentages.len() != 12 {
            return Err(QuoteError::Config(format!(
                "Rate table must have 12 entries (1x..12x), got {}",
                percentages.len()
            )));
        }

        let mut basis_points = [0u32; 12];
        let mut previous = -1.0f64;
        for (i, &pct) in percentages.iter().enumerate() {
            if !pct.is_finite() || pct < 0.0 {
                return Err(QuoteError::Config(format!(
                    "Invalid surcharge percentage for {}x: {}",
                    i + 1,
                    pct
                )));
            }
            if pct < previous {
                return Err(QuoteError::Config(format!(
                    "Surcharge for {}x ({}%) is lower than for {}x ({}%)",
                    i + 1,
                    pct,
                    i,
                    previous
                )));
            }
            previous = pct;
            basis_points[i] = (pct * 100.0).round() as u32;
        }

        Ok(Self { basis_points })
    }

    /// Surcharge in basis points for an installment count
    pub fn surcharge_bp(&self, installments: u8) -> QuoteResult<u32> {
        if installments == 0 || installments > MAX_INSTALLMENTS {
            return Err(QuoteError::InvalidInstallments {
                count: installments as u32,
            });
        }
        Ok(self.basis_points[installments as usize - 1])
    }

    /// Surcharge as a percentage, for display
    pub fn surcharge_percent(&self, installments: u8) -> QuoteResult<f64> {
        Ok(self.surcharge_bp(installments)? as f64 / 100.0)
    }
}

impl Default for RateTable {
    fn default() -> Self {
        // The default schedule is statically valid
        Self::from_percentages(&DEFAULT_RATE_PERCENTAGES)
            .unwrap_or(Self { basis_points: [0; 12] })
    }
}

/// Apply the payment method's surcharge to the due-now amount
///
/// Instant transfer carries no surcharge. Credit card multiplies by
/// `1 + percentage/100` under the rate table, rounding half-up to the
/// centavo. Installment counts outside 1..12 fail with an invalid-input
/// error; the calculator never clamps.
pub fn fee_adjusted_total(
    due_now: Money,
    method: &PaymentMethod,
    rates: &RateTable,
) -> QuoteResult<Money> {
    match method {
        PaymentMethod::InstantTransfer => Ok(due_now),
        PaymentMethod::CreditCard { installments } => {
            let bp = rates.surcharge_bp(*installments)?;
            Ok(apply_surcharge(due_now, bp))
        }
    }
}

/// Multiply an amount by (1 + bp/10000), rounding half-up to the centavo
fn apply_surcharge(amount: Money, bp: u32) -> Money {
    let scaled = amount.cents() as i128 * (10_000 + bp as i128);
    Money::from_cents(((scaled + 5_000) / 10_000) as i64)
}
