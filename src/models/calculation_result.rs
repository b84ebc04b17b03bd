//! Withholding result models.
//!
//! This module contains the [`TaxCalculationResult`] type produced for one
//! employee and one pay period, and the audit types that record how each
//! figure was reached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Estimated taxes for one employee and one pay period.
///
/// Every field is recomputed on each request; nothing here is persisted.
///
/// # Example
///
/// ```
/// use payroll_engine::models::TaxCalculationResult;
/// use rust_decimal::Decimal;
///
/// let result = TaxCalculationResult::zero();
/// assert_eq!(result.total_tax_liability, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCalculationResult {
    /// Gross pay the taxes were computed on.
    pub gross_taxable_pay: Decimal,
    /// Federal income tax withheld from the employee.
    pub fed_income_tax: Decimal,
    /// Social Security withheld from the employee.
    pub ss_employee: Decimal,
    /// Social Security owed by the employer.
    pub ss_employer: Decimal,
    /// Medicare withheld from the employee.
    pub med_employee: Decimal,
    /// Medicare owed by the employer.
    pub med_employer: Decimal,
    /// Federal unemployment tax owed by the employer; zero when not requested.
    pub futa_employer: Decimal,
    /// `fed_income_tax + ss_employee + med_employee`.
    pub total_employee_withholding: Decimal,
    /// `ss_employer + med_employer + futa_employer`.
    pub total_employer_cost: Decimal,
    /// Employee withholding plus employer cost.
    pub total_tax_liability: Decimal,
}

impl TaxCalculationResult {
    /// A result with every amount at zero.
    pub fn zero() -> Self {
        Self {
            gross_taxable_pay: Decimal::ZERO,
            fed_income_tax: Decimal::ZERO,
            ss_employee: Decimal::ZERO,
            ss_employer: Decimal::ZERO,
            med_employee: Decimal::ZERO,
            med_employer: Decimal::ZERO,
            futa_employer: Decimal::ZERO,
            total_employee_withholding: Decimal::ZERO,
            total_employer_cost: Decimal::ZERO,
            total_tax_liability: Decimal::ZERO,
        }
    }

    /// Adds another result into this one, field by field.
    pub fn accumulate(&mut self, other: &TaxCalculationResult) {
        self.gross_taxable_pay += other.gross_taxable_pay;
        self.fed_income_tax += other.fed_income_tax;
        self.ss_employee += other.ss_employee;
        self.ss_employer += other.ss_employer;
        self.med_employee += other.med_employee;
        self.med_employer += other.med_employer;
        self.futa_employer += other.futa_employer;
        self.total_employee_withholding += other.total_employee_withholding;
        self.total_employer_cost += other.total_employer_cost;
        self.total_tax_liability += other.total_tax_liability;
    }
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Where the rule comes from (e.g. "Pub 15-T Worksheet 1A, Step 1").
    pub reference: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The ordered audit steps behind one result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
}
