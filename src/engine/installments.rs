//! Installment scheduling
//!
//! Splits the fee-adjusted due-now amount evenly across installments.
//! Rounding rule: each installment is rounded half-up to the centavo, so the
//! sum of installments may drift from the fee-adjusted total by a fraction of
//! a centavo per installment. The drift is accepted, not corrected.

use crate::error::{QuoteError, QuoteResult};
use crate::models::{Money, PaymentMethod};

use super::fees::{fee_adjusted_total, RateTable, MAX_INSTALLMENTS};

/// Per-installment value for the due-now amount
///
/// A single installment returns the amount unchanged (no division, so no
/// rounding artifacts on the single-payment case). For more than one, the
/// fee-adjusted total under the same installment count is divided evenly,
/// rounded half-up to the centavo.
pub fn installment_value(
    due_now: Money,
    installments: u8,
    rates: &RateTable,
) -> QuoteResult<Money> {
    if installments == 0 || installments > MAX_INSTALLMENTS {
        return Err(QuoteError::InvalidInstallments {
            count: installments as u32,
        });
    }

    if installments == 1 {
        return Ok(due_now);
    }

    let total = fee_adjusted_total(
        due_now,
        &PaymentMethod::CreditCard { installments },
        rates,
    )?;

    let n = installments as i64;
    Ok(Money::from_cents((total.cents() + n / 2) / n))
}
