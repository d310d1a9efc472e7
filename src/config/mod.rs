//! Configuration and path management for quote-cli

pub mod paths;
pub mod settings;

pub use paths::QuotePaths;
pub use settings::{CompanyInfo, Settings};
