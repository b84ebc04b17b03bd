//! Calculation logic for the payroll engine.
//!
//! This module contains the pure calculation functions: gross pay from role,
//! hours, wage, salary and tips; FICA and FUTA; federal income tax withholding
//! by the Percentage Method; roster aggregation; and time-frame rescaling.

mod aggregation;
mod fica;
mod gross_pay;
mod income_tax;
mod rescale;
mod withholding;

pub use aggregation::{aggregate, summarize_withholding};
pub use fica::{FUTA_RATE, FicaAmounts, MEDICARE_RATE, SOCIAL_SECURITY_RATE, calculate_fica, calculate_futa};
pub use gross_pay::{OVERTIME_MULTIPLIER, compute_gross_pay, gross_pay_audit_step};
pub use income_tax::{
    DEPENDENT_CREDIT_PER_DEPENDENT, FederalIncomeTaxResult, annualize_wages,
    calculate_federal_income_tax, dependent_credit,
};
pub use rescale::{rescale_employee, rescale_employees};
pub use withholding::{
    MAX_GROSS_PAY, WithholdingCalculation, compute_withholding, explain_withholding,
};
