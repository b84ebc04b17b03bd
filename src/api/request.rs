//! Request types for the payroll engine API.
//!
//! Employee records are accepted in their model form; these types only add
//! the per-request parameters around them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Employee, PayFrequency, TimeFrame};

/// Request body for `POST /gross-pay`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrossPayRequest {
    /// The employee to compute gross pay for.
    pub employee: Employee,
}

/// Request body for `POST /withholding`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithholdingRequest {
    /// The employee to compute withholding for.
    pub employee: Employee,
    /// How often the employee is paid.
    pub frequency: PayFrequency,
    /// Whether to include the employer's FUTA liability.
    #[serde(default)]
    pub include_futa: bool,
    /// Gross pay to tax instead of the amount computed from the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gross_pay: Option<Decimal>,
    /// Pay date used to pick the tax year; the latest year when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_date: Option<NaiveDate>,
}

/// Request body for `POST /payroll/totals`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollTotalsRequest {
    /// The roster; inactive employees are skipped.
    pub employees: Vec<Employee>,
    /// The window the roster's hours and tips are expressed in.
    pub time_frame: TimeFrame,
}

/// Request body for `POST /payroll/withholding`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollWithholdingRequest {
    /// The roster; inactive employees are skipped.
    pub employees: Vec<Employee>,
    /// How often the roster is paid.
    pub frequency: PayFrequency,
    /// Whether to include the employer's FUTA liability.
    #[serde(default)]
    pub include_futa: bool,
    /// Pay date used to pick the tax year; the latest year when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_date: Option<NaiveDate>,
}

/// Request body for `POST /payroll/rescale`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RescaleRequest {
    /// The roster to rescale.
    pub employees: Vec<Employee>,
    /// The window the roster is currently expressed in.
    pub from: TimeFrame,
    /// The window to convert to.
    pub to: TimeFrame,
}
