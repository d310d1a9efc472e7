//! Totals aggregation
//!
//! Folds the selected services into the three canonical sums and merges the
//! transport cost into the due-now amount. These are pure functions of their
//! inputs; every presentation surface consumes the same result.

use serde::{Deserialize, Serialize};

use crate::error::{QuoteError, QuoteResult};
use crate::models::{Catalog, Money, SelectedService, TransportInfo};

/// The canonical sums derived from a service selection
///
/// Derived data, recomputed from the selection on every change and never
/// cached across edits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of entry + one-time prices across all services (transport-exclusive)
    pub unique_total: Money,

    /// Sum of monthly prices across non-advertising categories
    pub monthly_total: Money,

    /// Sum of monthly prices across paid-traffic categories
    pub paid_traffic_total: Money,
}

impl Totals {
    /// Whether any recurring amount is present
    pub fn has_recurring(&self) -> bool {
        !self.monthly_total.is_zero() || !self.paid_traffic_total.is_zero()
    }
}

/// Fold a service selection into its canonical totals
///
/// Entry and one-time prices accumulate into `unique_total`. Each monthly
/// price goes to `paid_traffic_total` when the catalog marks the service's
/// category as paid traffic, otherwise to `monthly_total`; an unrecognized
/// category classifies as non-advertising. The result is independent of list
/// order, and duplicate entries each count (de-duplication belongs to the
/// selection, not here).
pub fn aggregate(services: &[SelectedService], catalog: &Catalog) -> Totals {
    let mut totals = Totals::default();

    for service in services {
        totals.unique_total += service.prices.due_now();

        if catalog.is_paid_traffic(&service.category) {
            totals.paid_traffic_total += service.prices.monthly;
        } else {
            totals.monthly_total += service.prices.monthly;
        }
    }

    totals
}

/// Merge the transport cost into the due-now amount
///
/// Returns `unique_total + transport.cost * transport.days`. Zero or absent
/// transport contributes nothing. Negative inputs are rejected rather than
/// silently producing a negative total.
pub fn due_now(totals: &Totals, transport: &TransportInfo) -> QuoteResult<Money> {
    transport.validate()?;
    if totals.unique_total.is_negative() {
        return Err(QuoteError::negative_amount(
            "totals.unique_total",
            totals.unique_total,
        ));
    }

    Ok(totals.unique_total + transport.total())
}
