//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod employee;
mod gross_pay;
mod period;
mod totals;

pub use calculation_result::{AuditStep, AuditTrace, TaxCalculationResult};
pub use employee::{Employee, FilingStatus, MAX_AMOUNT, Role};
pub use gross_pay::{GrossPayBreakdown, PayBasis};
pub use period::{PayFrequency, TimeFrame};
pub use totals::{EmployeeWithholding, PayrollTotals, WithholdingSummary};
