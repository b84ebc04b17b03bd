//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading federal
//! withholding configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{FederalTaxConfig, JurisdictionMetadata, TaxYearConfig};

/// Loads federal withholding configuration from a directory.
///
/// # Directory Structure
///
/// ```text
/// config/us_federal/
/// ├── jurisdiction.yaml   # Jurisdiction metadata
/// └── tax_years/
///     └── 2024.yaml       # Rates and the six bracket tables for 2024
/// ```
///
/// Dropping a new file into `tax_years/` adds a tax year without a rebuild.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/us_federal").unwrap();
/// println!("Loaded {} tax year(s)", loader.config().tax_years().len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: FederalTaxConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or misses a field (`ConfigParseError`)
    /// - Any bracket table is unusable (`InvalidBracketTable`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<JurisdictionMetadata>(&path.join("jurisdiction.yaml"))?;
        let tax_years = Self::load_tax_years(&path.join("tax_years"))?;

        let config = FederalTaxConfig::new(metadata, tax_years)?;
        info!(
            jurisdiction = %config.metadata().code,
            tax_years = ?config.tax_years().iter().map(|ty| ty.tax_year).collect::<Vec<_>>(),
            "Loaded withholding configuration"
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads every tax-year file from the tax_years directory.
    fn load_tax_years(dir: &Path) -> EngineResult<Vec<TaxYearConfig>> {
        let dir_str = dir.display().to_string();

        let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut tax_years = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if path
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
            {
                tax_years.push(Self::load_yaml::<TaxYearConfig>(&path)?);
            }
        }

        if tax_years.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no tax year files found)", dir_str),
            });
        }

        Ok(tax_years)
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &FederalTaxConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> FederalTaxConfig {
        self.config
    }
}
