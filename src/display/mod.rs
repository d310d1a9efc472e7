//! Display formatting for terminal output

pub mod format;
pub mod summary;

pub use summary::format_summary;
