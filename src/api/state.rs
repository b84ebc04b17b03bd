//! Application state for the payroll engine API.

use std::sync::Arc;

use crate::config::FederalTaxConfig;

/// Shared application state.
///
/// Holds the tax-year configuration every handler computes against.
#[derive(Clone)]
pub struct AppState {
    config: Arc<FederalTaxConfig>,
}

impl AppState {
    /// Creates a new application state with the given configuration.
    pub fn new(config: FederalTaxConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the tax-year configuration.
    pub fn config(&self) -> &FederalTaxConfig {
        &self.config
    }
}
