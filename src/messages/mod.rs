//! Outbound message drafts
//!
//! Chat and e-mail drafts for sending a quote. Both reuse the entry and
//! monthly totals from the quote snapshot; fee and installment figures are
//! included only when configured, so the drafts can stay free of surcharge
//! detail ahead of a sales conversation.

pub mod email;
pub mod whatsapp;

pub use email::{format_email_body, mailto_link, EMAIL_SUBJECT};
pub use whatsapp::{format_whatsapp_message, whatsapp_link};

/// Options controlling what a message draft includes
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageOptions {
    /// Include fee-adjusted total and installment value in the draft
    pub include_payment_details: bool,
}

/// Percent-encode a text component for a link
///
/// Mail clients expect percent-encoded spaces in mailto URLs, so the '+'
/// produced by form encoding is rewritten to %20.
pub(crate) fn encode_component(s: &str) -> String {
    url::form_urlencoded::byte_serialize(s.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("a b"), "a%20b");
        assert_eq!(encode_component("1+1"), "1%2B1");
        assert_eq!(encode_component("R$ 10,50"), "R%24%2010%2C50");
    }
}
