//! Client contact information
//!
//! Free-text fields included verbatim on every surface when non-empty.
//! The core performs no validation on these; that is a UI concern.

use serde::{Deserialize, Serialize};

/// Client identification for the quote
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientInfo {
    /// Business name
    pub business_name: String,

    /// Contact person name
    pub contact_name: String,

    /// Contact WhatsApp number
    pub whatsapp: String,
}

impl ClientInfo {
    /// Whether any field is filled in
    pub fn is_present(&self) -> bool {
        !self.business_name.trim().is_empty()
            || !self.contact_name.trim().is_empty()
            || !self.whatsapp.trim().is_empty()
    }

    /// Iterate over the non-empty fields as (label, value) pairs
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("Business", self.business_name.trim()),
            ("Name", self.contact_name.trim()),
            ("WhatsApp", self.whatsapp.trim()),
        ]
        .into_iter()
        .filter(|(_, v)| !v.is_empty())
    }
}
