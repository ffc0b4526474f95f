//! CLI command implementations.

pub mod check;
pub mod providers;
pub mod scrape;
