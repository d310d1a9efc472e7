//! Quote snapshot
//!
//! A `Quote` is the single source of truth for one input snapshot: every
//! derived figure is computed exactly once here, and every presentation
//! surface (summary, document, message drafts, export) reads the same
//! immutable result. Adapters never recompute totals on their own.
//!
//! The generation timestamp is captured once and threaded through, so the
//! validity window cannot disagree between near-simultaneous renders.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::QuoteResult;
use crate::models::{
    Catalog, ClientInfo, Money, PaymentMethod, QuoteRequest, RecurringPayment, SelectedService,
    TransportInfo,
};

use super::fees::{fee_adjusted_total, RateTable};
use super::installments::installment_value;
use super::totals::{aggregate, due_now, Totals};

/// A fully computed quote for one request snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    /// Client identification (echoed input)
    pub client: ClientInfo,

    /// Selected services (echoed input)
    pub services: Vec<SelectedService>,

    /// Payment method for the due-now amount (echoed input)
    pub payment: PaymentMethod,

    /// Recurring payment terms, when the selection has recurring services
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring: Option<RecurringPayment>,

    /// Transport cost (echoed input)
    pub transport: TransportInfo,

    /// Canonical sums over the selection
    pub totals: Totals,

    /// Transport subtotal (cost x days)
    pub transport_total: Money,

    /// Amount payable immediately, before any surcharge
    pub due_now: Money,

    /// Due-now amount after the payment method's surcharge
    pub fee_adjusted: Money,

    /// Surcharge percentage applied, for display (credit card only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surcharge_percent: Option<f64>,

    /// Per-installment value, present only for plans with more than 1x
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installment_value: Option<Money>,

    /// When this quote was generated (captured once)
    pub generated_at: DateTime<Utc>,

    /// End of the validity window
    pub valid_until: DateTime<Utc>,
}

impl Quote {
    /// Build a quote from a request snapshot
    ///
    /// Runs the full pipeline (aggregate -> due-now merge -> fee/installment)
    /// once. `generated_at` is supplied by the caller so a single timestamp
    /// covers every surface rendered from this quote.
    pub fn build(
        request: &QuoteRequest,
        catalog: &Catalog,
        rates: &RateTable,
        validity_days: i64,
        generated_at: DateTime<Utc>,
    ) -> QuoteResult<Self> {
        request.validate()?;

        let totals = aggregate(&request.services, catalog);
        let due = due_now(&totals, &request.transport)?;
        let fee_adjusted = fee_adjusted_total(due, &request.payment, rates)?;

        let (surcharge_percent, installments) = match request.payment {
            PaymentMethod::InstantTransfer => (None, 1),
            PaymentMethod::CreditCard { installments } => (
                Some(rates.surcharge_percent(installments)?),
                installments,
            ),
        };

        let per_installment = if installments > 1 {
            Some(installment_value(due, installments, rates)?)
        } else {
            None
        };

        // Recurring terms only make sense with recurring services
        let recurring = if totals.has_recurring() {
            request.recurring
        } else {
            None
        };

        Ok(Self {
            client: request.client.clone(),
            services: request.services.clone(),
            payment: request.payment,
            recurring,
            transport: request.transport,
            totals,
            transport_total: request.transport.total(),
            due_now: due,
            fee_adjusted,
            surcharge_percent,
            installment_value: per_installment,
            generated_at,
            valid_until: generated_at + Duration::days(validity_days),
        })
    }

    /// Whether the selection contains any service at all
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Group the services by category id, preserving first-appearance order
    pub fn services_by_category(&self) -> Vec<(&str, Vec<&SelectedService>)> {
        let mut groups: Vec<(&str, Vec<&SelectedService>)> = Vec::new();
        for service in &self.services {
            match groups.iter_mut().find(|(id, _)| *id == service.category) {
                Some((_, members)) => members.push(service),
                None => groups.push((service.category.as_str(), vec![service])),
            }
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriceBreakdown;
    use chrono::TimeZone;

    fn request() -> QuoteRequest {
        QuoteRequest {
            services: vec![
                SelectedService::new(
                    "design",
                    "Brand identity",
                    PriceBreakdown {
                        entry: Money::from_cents(10000),
                        monthly: Money::from_cents(5000),
                        ..Default::default()
                    },
                ),
                SelectedService::new(
                    "paid-traffic",
                    "Ads management",
                    PriceBreakdown {
                        monthly: Money::from_cents(30000),
                        ..Default::default()
                    },
                ),
            ],
            transport: TransportInfo {
                cost: Money::from_cents(5000),
                days: 3,
            },
            payment: PaymentMethod::CreditCard { installments: 3 },
            ..Default::default()
        }
    }

    fn five_percent_table() -> RateTable {
        RateTable::from_percentages(&[5.0; 12]).unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_full_pipeline_scenario() {
        // 100 entry + 50x3 transport = 250 due now; 5% at 3x -> 262,50 / 87,50
        let quote = Quote::build(
            &request(),
            &Catalog::builtin(),
            &five_percent_table(),
            10,
            now(),
        )
        .unwrap();

        assert_eq!(quote.totals.unique_total.cents(), 10000);
        assert_eq!(quote.totals.monthly_total.cents(), 5000);
        assert_eq!(quote.totals.paid_traffic_total.cents(), 30000);
        assert_eq!(quote.transport_total.cents(), 15000);
        assert_eq!(quote.due_now.cents(), 25000);
        assert_eq!(quote.fee_adjusted.cents(), 26250);
        assert_eq!(quote.installment_value.unwrap().cents(), 8750);
        assert_eq!(quote.surcharge_percent, Some(5.0));
    }

    #[test]
    fn test_validity_window() {
        let quote = Quote::build(
            &request(),
            &Catalog::builtin(),
            &five_percent_table(),
            10,
            now(),
        )
        .unwrap();
        assert_eq!(quote.valid_until - quote.generated_at, Duration::days(10));
    }

    #[test]
    fn test_instant_transfer_has_no_surcharge_fields() {
        let mut req = request();
        req.payment = PaymentMethod::InstantTransfer;
        let quote = Quote::build(
            &req,
            &Catalog::builtin(),
            &five_percent_table(),
            10,
            now(),
        )
        .unwrap();

        assert_eq!(quote.fee_adjusted, quote.due_now);
        assert_eq!(quote.surcharge_percent, None);
        assert_eq!(quote.installment_value, None);
    }

    #[test]
    fn test_single_installment_has_no_installment_value() {
        let mut req = request();
        req.payment = PaymentMethod::CreditCard { installments: 1 };
        let quote = Quote::build(
            &req,
            &Catalog::builtin(),
            &five_percent_table(),
            10,
            now(),
        )
        .unwrap();

        assert_eq!(quote.installment_value, None);
        // Surcharge still applies at 1x
        assert_eq!(quote.fee_adjusted.cents(), 26250);
    }

    #[test]
    fn test_recurring_dropped_without_recurring_services() {
        let mut req = request();
        req.services
            .retain(|s| s.prices.monthly.is_zero());
        req.recurring = Some(RecurringPayment {
            method: crate::models::RecurringMethod::BankSlip,
            due_day: 10,
        });

        let quote = Quote::build(
            &req,
            &Catalog::builtin(),
            &five_percent_table(),
            10,
            now(),
        )
        .unwrap();
        assert!(quote.recurring.is_none());
    }

    #[test]
    fn test_invalid_installments_surface_at_build() {
        let mut req = request();
        req.payment = PaymentMethod::CreditCard { installments: 13 };
        let err = Quote::build(
            &req,
            &Catalog::builtin(),
            &five_percent_table(),
            10,
            now(),
        )
        .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_services_by_category_preserves_order() {
        let mut req = request();
        req.services.push(SelectedService::new(
            "design",
            "Landing page art",
            PriceBreakdown::default(),
        ));

        let quote = Quote::build(
            &req,
            &Catalog::builtin(),
            &five_percent_table(),
            10,
            now(),
        )
        .unwrap();

        let groups = quote.services_by_category();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "design");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "paid-traffic");
    }
}
