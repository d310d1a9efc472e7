//! Totals aggregation and fee calculation engine
//!
//! The numeric core of the application: pure, synchronous functions with no
//! I/O and no shared state. The pipeline runs aggregate -> due-now merge ->
//! fee/installment once per input snapshot, and the resulting `Quote` is the
//! only thing presentation code ever reads.

pub mod fees;
pub mod installments;
pub mod quote;
pub mod totals;

pub use fees::{fee_adjusted_total, RateTable, DEFAULT_RATE_PERCENTAGES, MAX_INSTALLMENTS};
pub use installments::installment_value;
pub use quote::Quote;
pub use totals::{aggregate, due_now, Totals};
