//! Core data models for quote-cli
//!
//! This module contains the data structures that describe a quote request:
//! money, selected services, payment terms, client info, transport and the
//! category catalog.

pub mod catalog;
pub mod client;
pub mod money;
pub mod payment;
pub mod request;
pub mod service;
pub mod transport;

pub use catalog::{Catalog, CategoryEntry};
pub use client::ClientInfo;
pub use money::Money;
pub use payment::{PaymentMethod, RecurringMethod, RecurringPayment, RECURRING_DUE_DAYS};
pub use request::QuoteRequest;
pub use service::{OptionValue, PriceBreakdown, SelectedService};
pub use transport::TransportInfo;
