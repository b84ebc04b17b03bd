//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine can report: configuration loading, tax-year
//! lookup and caller-supplied input that cannot be computed on.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     field: "filing_status".to_string(),
///     message: "unrecognized value 'widowed'".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid input for 'filing_status': unrecognized value 'widowed'"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A withholding bracket table is unusable.
    #[error("Invalid bracket table '{table}': {message}")]
    InvalidBracketTable {
        /// The table that failed validation (e.g. "2024/standard/single").
        table: String,
        /// What was wrong with it.
        message: String,
    },

    /// No tax-year configuration covers the requested year or date.
    #[error("No tax year configuration found for {requested}")]
    TaxYearNotFound {
        /// The requested tax year or pay date, as text.
        requested: String,
    },

    /// A caller-supplied value cannot be computed on.
    #[error("Invalid input for '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
