//! Withholding Engine.
//!
//! Combines FICA, FUTA and the Percentage Method into one
//! [`TaxCalculationResult`] per employee and pay period, optionally with an
//! audit trace of every step.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::config::TaxYearConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditTrace, Employee, MAX_AMOUNT, PayFrequency, TaxCalculationResult,
};

/// Largest per-period gross pay accepted for withholding.
///
/// Any gross built from a validated [`Employee`] stays below it, and
/// annualizing it at 52 periods stays far inside [`Decimal::MAX`].
pub const MAX_GROSS_PAY: Decimal = dec!(1_000_000_000_000_000_000_000);

use super::fica::{calculate_fica, calculate_futa};
use super::income_tax::calculate_federal_income_tax;

/// A withholding result together with the steps that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithholdingCalculation {
    /// The computed taxes.
    pub result: TaxCalculationResult,
    /// Ordered record of each rule applied.
    pub audit_trace: AuditTrace,
}

/// Computes one period's taxes for an employee.
///
/// The result is not rounded. See [`explain_withholding`] for the errors.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::compute_withholding;
/// use payroll_engine::config::TaxYearConfig;
/// use payroll_engine::models::{Employee, FilingStatus, PayFrequency};
/// use rust_decimal_macros::dec;
///
/// let mut employee = Employee::new("emp_001", "Diego Rivera");
/// employee.filing_status = Some(FilingStatus::Single);
///
/// let taxes = compute_withholding(
///     &employee,
///     dec!(1150),
///     PayFrequency::Biweekly,
///     false,
///     &TaxYearConfig::tax_year_2024(),
/// )
/// .unwrap();
///
/// assert_eq!(taxes.ss_employee, dec!(71.30));
/// assert_eq!(taxes.fed_income_tax.round_dp(2), dec!(61.69));
/// ```
pub fn compute_withholding(
    employee: &Employee,
    gross_pay: Decimal,
    frequency: PayFrequency,
    include_futa: bool,
    tax_year: &TaxYearConfig,
) -> EngineResult<TaxCalculationResult> {
    explain_withholding(employee, gross_pay, frequency, include_futa, tax_year)
        .map(|calculation| calculation.result)
}

/// Computes one period's taxes and records an audit step for each rule.
///
/// # Errors
///
/// - `InvalidInput` if `gross_pay` or a W-4 amount is negative or above its
///   cap ([`MAX_GROSS_PAY`], [`MAX_AMOUNT`]), or the employee has no filing
///   status.
/// - `CalculationError` if the selected bracket table is empty.
pub fn explain_withholding(
    employee: &Employee,
    gross_pay: Decimal,
    frequency: PayFrequency,
    include_futa: bool,
    tax_year: &TaxYearConfig,
) -> EngineResult<WithholdingCalculation> {
    validate_withholding_inputs(employee, gross_pay)?;

    let rates = &tax_year.rates;
    let mut steps = Vec::with_capacity(6);
    let mut step_number: u32 = 1;

    // FICA
    let fica = calculate_fica(gross_pay, rates);
    steps.push(AuditStep {
        step_number,
        rule_id: "fica".to_string(),
        rule_name: "Social Security and Medicare".to_string(),
        reference: "IRC 3101, 3111".to_string(),
        input: serde_json::json!({
            "gross_pay": gross_pay.normalize().to_string(),
            "social_security_rate": rates.social_security.normalize().to_string(),
            "medicare_rate": rates.medicare.normalize().to_string()
        }),
        output: serde_json::json!({
            "ss_employee": fica.ss_employee.normalize().to_string(),
            "ss_employer": fica.ss_employer.normalize().to_string(),
            "med_employee": fica.med_employee.normalize().to_string(),
            "med_employer": fica.med_employer.normalize().to_string()
        }),
        reasoning: format!(
            "${} x {} = ${} Social Security and ${} x {} = ${} Medicare, each from employee and employer",
            gross_pay.normalize(),
            rates.social_security.normalize(),
            fica.ss_employee.normalize(),
            gross_pay.normalize(),
            rates.medicare.normalize(),
            fica.med_employee.normalize()
        ),
    });
    step_number += 1;

    // FUTA
    let futa_employer = calculate_futa(gross_pay, include_futa, rates);
    steps.push(AuditStep {
        step_number,
        rule_id: "futa".to_string(),
        rule_name: "Federal Unemployment Tax".to_string(),
        reference: "IRC 3301".to_string(),
        input: serde_json::json!({
            "gross_pay": gross_pay.normalize().to_string(),
            "include_futa": include_futa,
            "futa_rate": rates.futa.normalize().to_string()
        }),
        output: serde_json::json!({
            "futa_employer": futa_employer.normalize().to_string()
        }),
        reasoning: if include_futa {
            format!(
                "${} x {} = ${} owed by the employer",
                gross_pay.normalize(),
                rates.futa.normalize(),
                futa_employer.normalize()
            )
        } else {
            "FUTA not requested".to_string()
        },
    });
    step_number += 1;

    let fit = calculate_federal_income_tax(employee, gross_pay, frequency, &tax_year.tables)?;
    let periods = frequency.periods_per_year();

    // Worksheet 1A, Step 1
    steps.push(AuditStep {
        step_number,
        rule_id: "annualize_wages".to_string(),
        rule_name: "Adjusted Annual Wage Amount".to_string(),
        reference: "Pub 15-T Worksheet 1A, Step 1".to_string(),
        input: serde_json::json!({
            "gross_pay": gross_pay.normalize().to_string(),
            "frequency": frequency,
            "periods_per_year": periods,
            "other_income": employee.other_income.normalize().to_string(),
            "deductions": employee.deductions.normalize().to_string()
        }),
        output: serde_json::json!({
            "annualized_wages": fit.annualized_wages.normalize().to_string()
        }),
        reasoning: format!(
            "${} x {} + ${} other income - ${} deductions = ${}",
            gross_pay.normalize(),
            periods,
            employee.other_income.normalize(),
            employee.deductions.normalize(),
            fit.annualized_wages.normalize()
        ),
    });
    step_number += 1;

    // Worksheet 1A, Step 2
    let table = if employee.multiple_jobs {
        "step_2c_checkbox"
    } else {
        "standard"
    };
    let filing_status = employee.require_filing_status()?;
    steps.push(AuditStep {
        step_number,
        rule_id: "tentative_withholding".to_string(),
        rule_name: "Tentative Withholding Amount".to_string(),
        reference: "Pub 15-T Worksheet 1A, Step 2".to_string(),
        input: serde_json::json!({
            "tax_year": tax_year.tax_year,
            "filing_status": filing_status,
            "table": table,
            "annualized_wages": fit.annualized_wages.normalize().to_string()
        }),
        output: serde_json::json!({
            "bracket_over": fit.bracket.over.normalize().to_string(),
            "base_tax": fit.bracket.base_tax.normalize().to_string(),
            "rate": fit.bracket.rate.normalize().to_string(),
            "tentative_annual_tax": fit.tentative_annual_tax.normalize().to_string()
        }),
        reasoning: format!(
            "{} {} {} table, bracket over ${}: ${} + (${} - ${}) x {} = ${}",
            tax_year.tax_year,
            filing_status,
            table,
            fit.bracket.over.normalize(),
            fit.bracket.base_tax.normalize(),
            fit.annualized_wages.normalize(),
            fit.bracket.excess_over.normalize(),
            fit.bracket.rate.normalize(),
            fit.tentative_annual_tax.normalize()
        ),
    });
    step_number += 1;

    // Worksheet 1A, Step 3
    let clamped = fit.tentative_annual_tax - employee.dependent_amount_usd < Decimal::ZERO;
    steps.push(AuditStep {
        step_number,
        rule_id: "dependent_credit".to_string(),
        rule_name: "Dependent Credit".to_string(),
        reference: "Pub 15-T Worksheet 1A, Step 3".to_string(),
        input: serde_json::json!({
            "tentative_annual_tax": fit.tentative_annual_tax.normalize().to_string(),
            "dependent_amount_usd": employee.dependent_amount_usd.normalize().to_string()
        }),
        output: serde_json::json!({
            "annual_withholding": fit.annual_withholding.normalize().to_string(),
            "clamped_to_zero": clamped
        }),
        reasoning: if clamped {
            format!(
                "Credit ${} exceeds tentative tax ${}; withholding is $0",
                employee.dependent_amount_usd.normalize(),
                fit.tentative_annual_tax.normalize()
            )
        } else {
            format!(
                "${} - ${} credit = ${}",
                fit.tentative_annual_tax.normalize(),
                employee.dependent_amount_usd.normalize(),
                fit.annual_withholding.normalize()
            )
        },
    });
    step_number += 1;

    // Worksheet 1A, Step 4
    steps.push(AuditStep {
        step_number,
        rule_id: "deannualize".to_string(),
        rule_name: "Per-Period Federal Income Tax".to_string(),
        reference: "Pub 15-T Worksheet 1A, Step 4".to_string(),
        input: serde_json::json!({
            "annual_withholding": fit.annual_withholding.normalize().to_string(),
            "periods_per_year": periods
        }),
        output: serde_json::json!({
            "fed_income_tax": fit.fed_income_tax.normalize().to_string()
        }),
        reasoning: format!(
            "${} / {} = ${}",
            fit.annual_withholding.normalize(),
            periods,
            fit.fed_income_tax.round_dp(2).normalize()
        ),
    });

    let total_employee_withholding = fit.fed_income_tax + fica.ss_employee + fica.med_employee;
    let total_employer_cost = fica.ss_employer + fica.med_employer + futa_employer;

    Ok(WithholdingCalculation {
        result: TaxCalculationResult {
            gross_taxable_pay: gross_pay,
            fed_income_tax: fit.fed_income_tax,
            ss_employee: fica.ss_employee,
            ss_employer: fica.ss_employer,
            med_employee: fica.med_employee,
            med_employer: fica.med_employer,
            futa_employer,
            total_employee_withholding,
            total_employer_cost,
            total_tax_liability: total_employee_withholding + total_employer_cost,
        },
        audit_trace: AuditTrace { steps },
    })
}

fn validate_withholding_inputs(employee: &Employee, gross_pay: Decimal) -> EngineResult<()> {
    let amounts = [
        ("gross_pay", gross_pay, MAX_GROSS_PAY),
        ("dependent_amount_usd", employee.dependent_amount_usd, MAX_AMOUNT),
        ("other_income", employee.other_income, MAX_AMOUNT),
        ("deductions", employee.deductions, MAX_AMOUNT),
    ];

    for (field, value, cap) in amounts {
        if value < Decimal::ZERO {
            return Err(EngineError::invalid_input(
                field,
                format!("must not be negative (employee '{}', got {})", employee.id, value),
            ));
        }
        if value > cap {
            return Err(EngineError::invalid_input(
                field,
                format!("must not exceed {} (employee '{}', got {})", cap, employee.id, value),
            ));
        }
    }
    Ok(())
}
