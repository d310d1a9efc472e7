//! Formatted quote document
//!
//! Renders the downloadable document for a quote: company header, validity
//! window, client section, services grouped by catalog category, payment
//! info, totals and the fixed observations. Every figure comes from the
//! `Quote` snapshot; the date and validity window use the timestamp captured
//! when the quote was built, not the clock at render time.

use crate::config::Settings;
use crate::display::format::{double_separator, format_header, separator};
use crate::engine::Quote;
use crate::models::Catalog;

const WIDTH: usize = 60;

/// Render the full quote document as formatted text
pub fn format_document(quote: &Quote, catalog: &Catalog, settings: &Settings) -> String {
    let mut doc = String::new();
    let date_format = settings.date_format.as_str();
    let validity_days = (quote.valid_until - quote.generated_at).num_days();

    // Header
    doc.push_str(&double_separator(WIDTH));
    doc.push('\n');
    doc.push_str(&format_header(&settings.company.name, WIDTH));
    doc.push('\n');
    doc.push_str(&format_header("Personalized Quote", WIDTH));
    doc.push('\n');
    doc.push_str(&format_header(
        &format!(
            "Date: {} | Valid until: {}",
            quote.generated_at.format(date_format),
            quote.valid_until.format(date_format)
        ),
        WIDTH,
    ));
    doc.push('\n');
    doc.push_str(&double_separator(WIDTH));
    doc.push_str("\n\n");

    // Client information
    if quote.client.is_present() {
        doc.push_str("Client\n");
        doc.push_str(&separator(WIDTH));
        doc.push('\n');
        for (label, value) in quote.client.fields() {
            doc.push_str(&format!("{}: {}\n", label, value));
        }
        doc.push('\n');
    }

    // Services by category
    doc.push_str("Selected Services\n");
    doc.push_str(&separator(WIDTH));
    doc.push('\n');

    if quote.is_empty() {
        doc.push_str("No services selected.\n");
    }

    for (category_id, services) in quote.services_by_category() {
        doc.push_str(&format!("{}\n", catalog.label(category_id)));
        for service in services {
            doc.push_str(&format!("  {}\n", service.name));
            if !service.prices.one_time.is_zero() {
                doc.push_str(&format!("    One-time: {}\n", service.prices.one_time));
            }
            if !service.prices.entry.is_zero() {
                doc.push_str(&format!("    Entry: {}\n", service.prices.entry));
            }
            if !service.prices.monthly.is_zero() {
                doc.push_str(&format!("    Monthly: {}\n", service.prices.monthly));
            }
            if let Some(options) = service.options_line() {
                doc.push_str(&format!("    {}\n", options));
            }
        }
        doc.push('\n');
    }

    // Payment information
    doc.push_str("Payment\n");
    doc.push_str(&separator(WIDTH));
    doc.push('\n');
    doc.push_str(&format!("{}\n\n", quote.payment));

    // Totals
    doc.push_str("Totals\n");
    doc.push_str(&separator(WIDTH));
    doc.push('\n');
    doc.push_str(&format!("Entry total: {}\n", quote.due_now));
    if !quote.totals.monthly_total.is_zero() {
        doc.push_str(&format!("Monthly total: {}\n", quote.totals.monthly_total));
    }
    if !quote.totals.paid_traffic_total.is_zero() {
        doc.push_str(&format!(
            "Paid traffic: {}\n",
            quote.totals.paid_traffic_total
        ));
    }
    if !quote.transport.cost.is_zero() {
        doc.push_str(&format!(
            "Transport ({}): {}\n",
            quote.transport.days_label(),
            quote.transport_total
        ));
    }
    if let Some(value) = quote.installment_value {
        doc.push_str(&format!(
            "Split in {}x of: {} (total {})\n",
            quote.payment.installments(),
            value,
            quote.fee_adjusted
        ));
    }
    doc.push('\n');

    // Observations
    doc.push_str("Notes\n");
    doc.push_str(&separator(WIDTH));
    doc.push('\n');
    doc.push_str(&format!("- Quote valid for {} days.\n", validity_days));
    doc.push_str("- The entry amount is paid in the first month; monthly fees start in the second month.\n");
    doc.push_str("- Amounts subject to change with requested customizations.\n");
    doc.push_str("- Monthly payments carry no card surcharge.\n\n");

    // Footer
    doc.push_str(&separator(WIDTH));
    doc.push('\n');
    let mut footer_line = settings.company.name.clone();
    if !settings.company.address.is_empty() {
        footer_line.push_str(&format!(" - {}", settings.company.address));
    }
    doc.push_str(&format_header(&footer_line, WIDTH));
    doc.push('\n');

    let contact: Vec<&str> = [
        settings.company.email.as_str(),
        settings.company.whatsapp.as_str(),
    ]
    .into_iter()
    .filter(|s| !s.is_empty())
    .collect();
    if !contact.is_empty() {
        doc.push_str(&format_header(&contact.join(" | "), WIDTH));
        doc.push('\n');
    }

    doc.push_str(&format_header(
        &format!(
            "This quote is valid until {}",
            quote.valid_until.format(date_format)
        ),
        WIDTH,
    ));
    doc.push('\n');

    doc
}
