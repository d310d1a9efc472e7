//! On-screen quote summary
//!
//! Renders the computed quote for the terminal. Reads the `Quote` snapshot
//! only; no figure is recomputed here.

use crate::engine::Quote;

use super::format::{format_percentage, left_align, right_align, separator};

const VALUE_WIDTH: usize = 16;

/// Render the quote summary for terminal display
pub fn format_summary(quote: &Quote) -> String {
    if quote.is_empty() {
        return "No services selected. Add services to view the quote.\n".to_string();
    }

    let mut rows: Vec<(String, String)> = Vec::new();

    rows.push((
        "Entry total:".to_string(),
        money_or_dash(quote.totals.unique_total),
    ));
    rows.push((
        "Monthly total:".to_string(),
        if quote.totals.monthly_total.is_zero() {
            "-".to_string()
        } else {
            format!("{}/month", quote.totals.monthly_total)
        },
    ));

    if !quote.totals.paid_traffic_total.is_zero() {
        rows.push((
            "Paid traffic:".to_string(),
            format!("{}/month", quote.totals.paid_traffic_total),
        ));
    }

    if !quote.transport.cost.is_zero() {
        rows.push((
            format!("Transport ({}):", quote.transport.days_label()),
            quote.transport_total.to_string(),
        ));
    }

    rows.push(("Due now:".to_string(), quote.due_now.to_string()));
    rows.push(("Payment:".to_string(), quote.payment.to_string()));

    if quote.payment.is_installment_plan() {
        if let Some(pct) = quote.surcharge_percent {
            rows.push((
                format!("Total with card fee ({}):", format_percentage(pct)),
                quote.fee_adjusted.to_string(),
            ));
        }
        if let Some(value) = quote.installment_value {
            rows.push((
                format!("{}x installments of:", quote.payment.installments()),
                value.to_string(),
            ));
        }
    }

    if let Some(recurring) = &quote.recurring {
        rows.push((
            "Recurring terms:".to_string(),
            format!("{}, due day {}", recurring.method, recurring.due_day),
        ));
    }

    let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let width = label_width + 2 + VALUE_WIDTH;

    let mut output = String::new();
    output.push_str("Quote Summary\n");
    output.push_str(&separator(width));
    output.push('\n');

    for (label, value) in rows {
        output.push_str(&format!(
            "{}  {}\n",
            left_align(&label, label_width),
            right_align(&value, VALUE_WIDTH)
        ));
    }

    if quote.totals.has_recurring() {
        output.push_str(&separator(width));
        output.push('\n');
        output.push_str("Monthly amounts carry no card surcharge.\n");
        output.push_str("Recurring collection: Pix, bank slip or card; due days 5, 10, 15, 20 or 25.\n");
    }

    output
}

fn money_or_dash(amount: crate::models::Money) -> String {
    if amount.is_zero() {
        "-".to_string()
    } else {
        amount.to_string()
    }
}
