//! HTTP API module for the payroll engine.
//!
//! This module provides the REST API endpoints for gross pay, withholding
//! estimates and roster rollups.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    GrossPayRequest, PayrollTotalsRequest, PayrollWithholdingRequest, RescaleRequest,
    WithholdingRequest,
};
pub use response::{ApiError, ApiErrorResponse, HealthResponse, RescaleResponse, WithholdingResponse};
pub use state::AppState;
