//! Response types for the payroll engine API.
//!
//! This module defines the success bodies that wrap calculation results and
//! the error response structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{AuditTrace, Employee, GrossPayBreakdown, TaxCalculationResult, TimeFrame};

/// Response body for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok" when the service answers.
    pub status: String,
    /// The engine version.
    pub version: String,
    /// Tax years the service can compute, oldest first.
    pub tax_years: Vec<i32>,
}

/// Response body for `POST /withholding`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithholdingResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The tax year whose tables were used.
    pub tax_year: i32,
    /// How gross pay was computed; absent when the caller supplied gross pay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gross_pay: Option<GrossPayBreakdown>,
    /// The estimated taxes.
    pub taxes: TaxCalculationResult,
    /// Ordered record of each rule applied.
    pub audit_trace: AuditTrace,
}

/// Response body for `POST /payroll/rescale`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RescaleResponse {
    /// The window the returned roster is expressed in.
    pub time_frame: TimeFrame,
    /// The rescaled roster, in request order.
    pub employees: Vec<Employee>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates an invalid input error response.
    pub fn invalid_input(field: &str, message: impl Into<String>) -> Self {
        Self::with_details(
            "INVALID_INPUT",
            message,
            format!("The value supplied for '{}' cannot be computed on", field),
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response with the given body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidBracketTable { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            EngineError::TaxYearNotFound { .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "TAX_YEAR_NOT_FOUND",
                    message,
                    "No withholding tables are configured for the requested year",
                ),
            ),
            EngineError::InvalidInput { field, .. } => {
                ApiErrorResponse::bad_request(ApiError::invalid_input(&field, message))
            }
            EngineError::CalculationError { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_input_maps_to_400() {
        let api_error: ApiErrorResponse =
            EngineError::invalid_input("hours_worked", "must not be negative").into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_INPUT");
        assert_eq!(
            api_error.error.message,
            "Invalid input for 'hours_worked': must not be negative"
        );
        assert!(api_error.error.details.unwrap().contains("hours_worked"));
    }

    #[test]
    fn test_tax_year_not_found_maps_to_400() {
        let api_error: ApiErrorResponse = EngineError::TaxYearNotFound {
            requested: "pay date 2019-06-01".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "TAX_YEAR_NOT_FOUND");
        assert!(api_error.error.message.contains("2019-06-01"));
    }

    #[test]
    fn test_config_errors_map_to_500() {
        let api_error: ApiErrorResponse = EngineError::InvalidBracketTable {
            table: "2024/standard/single".to_string(),
            message: "table is empty".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }

    #[test]
    fn test_calculation_error_maps_to_500() {
        let api_error: ApiErrorResponse = EngineError::CalculationError {
            message: "no brackets".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CALCULATION_ERROR");
    }
}
