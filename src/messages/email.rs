//! E-mail message draft
//!
//! Plain-text variant of the outbound draft, plus a mailto link with subject
//! and body pre-filled.

use url::Url;

use crate::engine::Quote;
use crate::error::{QuoteError, QuoteResult};

use super::{encode_component, MessageOptions};

/// Subject line for outbound quote e-mails
pub const EMAIL_SUBJECT: &str = "NEW QUOTE";

/// Format the e-mail body for a quote
pub fn format_email_body(quote: &Quote, options: &MessageOptions, company_name: &str) -> String {
    let mut body = format!("{} quote\n\n", company_name);

    for (label, value) in quote.client.fields() {
        body.push_str(&format!("{}: {}\n", label, value));
    }

    body.push_str("\nSelected Services:\n");
    for service in &quote.services {
        body.push_str(&format!("\n{}", service.name));
        if !service.prices.entry.is_zero() {
            body.push_str(&format!("\nEntry: {}", service.prices.entry));
        }
        if !service.prices.monthly.is_zero() {
            body.push_str(&format!("\nMonthly: {}", service.prices.monthly));
        }
        if !service.prices.one_time.is_zero() {
            body.push_str(&format!("\nOne-time: {}", service.prices.one_time));
        }
    }

    body.push_str("\n\nTotals:");
    body.push_str(&format!("\nEntry total: {}", quote.totals.unique_total));
    body.push_str(&format!("\nMonthly total: {}", quote.totals.monthly_total));

    if options.include_payment_details {
        body.push_str(&format!("\nDue now: {}", quote.due_now));
        if let Some(value) = quote.installment_value {
            body.push_str(&format!(
                "\n{}x of: {} (total {})",
                quote.payment.installments(),
                value,
                quote.fee_adjusted
            ));
        }
    }

    body
}

/// Build the mailto link carrying the draft
pub fn mailto_link(
    quote: &Quote,
    options: &MessageOptions,
    to: &str,
    company_name: &str,
) -> QuoteResult<String> {
    if to.trim().is_empty() {
        return Err(QuoteError::Link(
            "No e-mail address configured for outbound links".into(),
        ));
    }

    // Parse first so a malformed address fails here, not in the mail client
    Url::parse(&format!("mailto:{}", to.trim()))
        .map_err(|e| QuoteError::Link(format!("Invalid e-mail address: {}", e)))?;

    let body = format_email_body(quote, options, company_name);
    Ok(format!(
        "mailto:{}?subject={}&body={}",
        to.trim(),
        encode_component(EMAIL_SUBJECT),
        encode_component(&body)
    ))
}
