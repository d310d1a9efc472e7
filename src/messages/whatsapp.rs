//! WhatsApp message draft
//!
//! Builds the chat draft and the ready-to-open wa.me link. Bold markers use
//! WhatsApp's `*...*` syntax.

use url::Url;

use crate::engine::Quote;
use crate::error::{QuoteError, QuoteResult};

use super::{encode_component, MessageOptions};

/// Format the WhatsApp draft for a quote
pub fn format_whatsapp_message(quote: &Quote, options: &MessageOptions) -> String {
    let mut message = String::from("Hello, I'm interested in this quote\n\n");

    for (label, value) in quote.client.fields() {
        message.push_str(&format!("*{}:* {}\n", label, value));
    }

    message.push_str("\n*Selected Services:*\n");
    for service in &quote.services {
        message.push_str(&format!("\n*{}*", service.name));
        if !service.prices.entry.is_zero() {
            message.push_str(&format!("\nEntry: {}", service.prices.entry));
        }
        if !service.prices.monthly.is_zero() {
            message.push_str(&format!("\nMonthly: {}", service.prices.monthly));
        }
        if !service.prices.one_time.is_zero() {
            message.push_str(&format!("\nOne-time: {}", service.prices.one_time));
        }
    }

    message.push_str("\n\n*Totals:*");
    message.push_str(&format!("\n*Entry total:* {}", quote.totals.unique_total));
    message.push_str(&format!("\n*Monthly total:* {}", quote.totals.monthly_total));

    if options.include_payment_details {
        message.push_str(&format!("\n*Due now:* {}", quote.due_now));
        if let Some(value) = quote.installment_value {
            message.push_str(&format!(
                "\n*{}x of:* {} (total {})",
                quote.payment.installments(),
                value,
                quote.fee_adjusted
            ));
        }
    }

    message
}

/// Build the wa.me link carrying the draft
pub fn whatsapp_link(quote: &Quote, options: &MessageOptions, number: &str) -> QuoteResult<String> {
    if number.trim().is_empty() {
        return Err(QuoteError::Link(
            "No WhatsApp number configured for outbound links".into(),
        ));
    }

    let base = Url::parse(&format!("https://wa.me/{}", number.trim()))
        .map_err(|e| QuoteError::Link(format!("Invalid WhatsApp number: {}", e)))?;

    let message = format_whatsapp_message(quote, options);
    Ok(format!("{}?text={}", base, encode_component(&message)))
}
