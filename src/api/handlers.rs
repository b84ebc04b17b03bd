//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::{get, post},
};
use chrono::{NaiveDate, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    aggregate, compute_gross_pay, explain_withholding, gross_pay_audit_step, rescale_employees,
    summarize_withholding,
};
use crate::config::{FederalTaxConfig, TaxYearConfig};
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditTrace, Employee, GrossPayBreakdown, PayrollTotals, WithholdingSummary};

use super::request::{
    GrossPayRequest, PayrollTotalsRequest, PayrollWithholdingRequest, RescaleRequest,
    WithholdingRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, HealthResponse, RescaleResponse, WithholdingResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/gross-pay", post(gross_pay_handler))
        .route("/withholding", post(withholding_handler))
        .route("/payroll/totals", post(payroll_totals_handler))
        .route("/payroll/withholding", post(payroll_withholding_handler))
        .route("/payroll/rescale", post(rescale_handler))
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        tax_years: state
            .config()
            .tax_years()
            .iter()
            .map(|ty| ty.tax_year)
            .collect(),
    })
}

/// Handler for POST /gross-pay.
async fn gross_pay_handler(
    payload: Result<Json<GrossPayRequest>, JsonRejection>,
) -> Result<Json<GrossPayBreakdown>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing gross pay request");

    let request = parse_body(payload, correlation_id)?;
    let employee = request.employee;
    employee
        .validate()
        .map_err(|err| engine_failure(correlation_id, err))?;

    let breakdown = compute_gross_pay(&employee);
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee.id,
        pay_basis = ?breakdown.pay_basis,
        gross_total = %breakdown.gross_total,
        "Gross pay computed"
    );
    Ok(Json(breakdown))
}

/// Handler for POST /withholding.
///
/// Computes gross pay from the employee record unless the request supplies
/// one, then estimates that period's taxes.
async fn withholding_handler(
    State(state): State<AppState>,
    payload: Result<Json<WithholdingRequest>, JsonRejection>,
) -> Result<Json<WithholdingResponse>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing withholding request");

    let request = parse_body(payload, correlation_id)?;

    let start_time = Instant::now();
    let response = perform_withholding(&request, state.config())
        .map_err(|err| engine_failure(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee.id,
        tax_year = response.tax_year,
        gross_pay = %response.taxes.gross_taxable_pay,
        total_tax_liability = %response.taxes.total_tax_liability,
        duration_us = start_time.elapsed().as_micros(),
        "Withholding calculation completed successfully"
    );
    Ok(Json(response))
}

/// Handler for POST /payroll/totals.
async fn payroll_totals_handler(
    payload: Result<Json<PayrollTotalsRequest>, JsonRejection>,
) -> Result<Json<PayrollTotals>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll totals request");

    let request = parse_body(payload, correlation_id)?;
    validate_roster(request.employees.iter().filter(|e| e.is_active))
        .map_err(|err| engine_failure(correlation_id, err))?;

    let totals = aggregate(&request.employees, request.time_frame);
    info!(
        correlation_id = %correlation_id,
        time_frame = %totals.time_frame,
        active_employees = totals.active_employees,
        grand_total = %totals.grand_total,
        "Payroll totals computed"
    );
    Ok(Json(totals))
}

/// Handler for POST /payroll/withholding.
async fn payroll_withholding_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollWithholdingRequest>, JsonRejection>,
) -> Result<Json<WithholdingSummary>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll withholding request");

    let request = parse_body(payload, correlation_id)?;

    let start_time = Instant::now();
    let summary = resolve_tax_year(state.config(), request.pay_date)
        .and_then(|tax_year| {
            summarize_withholding(
                &request.employees,
                request.frequency,
                request.include_futa,
                tax_year,
            )
        })
        .map_err(|err| engine_failure(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        tax_year = summary.tax_year,
        employees = summary.employees.len(),
        total_tax_liability = %summary.totals.total_tax_liability,
        duration_us = start_time.elapsed().as_micros(),
        "Payroll withholding completed successfully"
    );
    Ok(Json(summary))
}

/// Handler for POST /payroll/rescale.
async fn rescale_handler(
    payload: Result<Json<RescaleRequest>, JsonRejection>,
) -> Result<Json<RescaleResponse>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing rescale request");

    let request = parse_body(payload, correlation_id)?;
    // Every record is rescaled, inactive ones included
    validate_roster(&request.employees).map_err(|err| engine_failure(correlation_id, err))?;

    let employees = rescale_employees(&request.employees, request.from, request.to);
    info!(
        correlation_id = %correlation_id,
        from = %request.from,
        to = %request.to,
        employees = employees.len(),
        "Roster rescaled"
    );
    Ok(Json(RescaleResponse {
        time_frame: request.to,
        employees,
    }))
}

/// Unwraps a JSON body or turns the rejection into a 400 response.
fn parse_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiErrorResponse> {
    let rejection = match payload {
        Ok(Json(body)) => return Ok(body),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the failure
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else if body_text.contains("unknown variant") {
                ApiError::new("INVALID_INPUT", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err(ApiErrorResponse::bad_request(error))
}

/// Logs an engine error and converts it to its HTTP response.
fn engine_failure(correlation_id: Uuid, err: EngineError) -> ApiErrorResponse {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Calculation failed"
    );
    err.into()
}

/// The tax year in force on `pay_date`, or the latest one.
fn resolve_tax_year(
    config: &FederalTaxConfig,
    pay_date: Option<NaiveDate>,
) -> EngineResult<&TaxYearConfig> {
    match pay_date {
        Some(date) => config.tax_year_for(date),
        None => config.latest(),
    }
}

/// Validates the records an endpoint computes on.
fn validate_roster<'a>(employees: impl IntoIterator<Item = &'a Employee>) -> EngineResult<()> {
    employees.into_iter().try_for_each(Employee::validate)
}

/// Performs the withholding calculation for a single employee.
fn perform_withholding(
    request: &WithholdingRequest,
    config: &FederalTaxConfig,
) -> EngineResult<WithholdingResponse> {
    let employee = &request.employee;
    employee.validate()?;
    let tax_year = resolve_tax_year(config, request.pay_date)?;

    let mut steps = Vec::new();
    let (gross_pay, breakdown) = match request.gross_pay {
        Some(amount) => (amount, None),
        None => {
            let breakdown = compute_gross_pay(employee);
            steps.push(gross_pay_audit_step(employee, &breakdown, 1));
            (breakdown.gross_total, Some(breakdown))
        }
    };

    let calculation = explain_withholding(
        employee,
        gross_pay,
        request.frequency,
        request.include_futa,
        tax_year,
    )?;

    // Withholding steps are numbered from 1; shift them past the gross pay step
    let offset = steps.len() as u32;
    steps.extend(calculation.audit_trace.steps.into_iter().map(|mut step| {
        step.step_number += offset;
        step
    }));

    Ok(WithholdingResponse {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        tax_year: tax_year.tax_year,
        gross_pay: breakdown,
        taxes: calculation.result,
        audit_trace: AuditTrace { steps },
    })
}
