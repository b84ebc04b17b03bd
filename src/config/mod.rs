//! Tax-year configuration for the payroll engine.
//!
//! This module holds the year-versioned statutory rates and Percentage
//! Method bracket tables, the compiled-in 2024 data, and a loader for
//! swapping in other tax years from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/us_federal").unwrap().into_config();
//! println!("Loaded: {}", config.metadata().name);
//! ```

mod builtin;
mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    Bracket, BracketTable, BracketTables, FederalTaxConfig, FilingStatusTables,
    JurisdictionMetadata, StatutoryRates, TaxYearConfig,
};
