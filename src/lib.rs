//! quote-cli - Terminal-based price-quote builder for service agencies
//!
//! This library builds mathematically consistent price quotes from a list of
//! selected services with heterogeneous pricing shapes (one-time, entry,
//! monthly, paid-traffic budget), a payment method and optional transport
//! costs. Each quote is computed exactly once per input snapshot and the same
//! immutable result feeds every surface: the terminal summary, the formatted
//! document and the outbound WhatsApp/e-mail drafts.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, services, payment terms, catalog)
//! - `engine`: Totals aggregation, fee calculation and installment scheduling
//! - `display`: Terminal summary rendering
//! - `export`: Formatted document and JSON/YAML quote export
//! - `messages`: Outbound WhatsApp and e-mail drafts
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust
//! use quote_cli::engine::{Quote, RateTable};
//! use quote_cli::models::{Catalog, Money, PriceBreakdown, QuoteRequest, SelectedService};
//!
//! let request = QuoteRequest {
//!     services: vec![SelectedService::new(
//!         "design",
//!         "Brand identity",
//!         PriceBreakdown {
//!             entry: Money::from_cents(10000),
//!             ..Default::default()
//!         },
//!     )],
//!     ..Default::default()
//! };
//!
//! let quote = Quote::build(
//!     &request,
//!     &Catalog::builtin(),
//!     &RateTable::default(),
//!     10,
//!     chrono::Utc::now(),
//! )?;
//! assert_eq!(quote.due_now, Money::from_cents(10000));
//! # Ok::<(), quote_cli::QuoteError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod messages;
pub mod models;

pub use error::QuoteError;
