//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the engine layer.

pub mod quote;

pub use quote::{
    build_quote, handle_config, handle_document, handle_export, handle_init, handle_message,
    handle_summary, load_catalog, ExportFormat, MessageChannel,
};
