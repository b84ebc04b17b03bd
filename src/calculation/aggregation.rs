//! Roster-level aggregation.
//!
//! Rolls gross pay and withholding up over the active employees of a roster.
//! Inactive employees are skipped entirely.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::TaxYearConfig;
use crate::error::EngineResult;
use crate::models::{
    Employee, EmployeeWithholding, PayFrequency, PayrollTotals, TaxCalculationResult, TimeFrame,
    WithholdingSummary,
};

use super::gross_pay::compute_gross_pay;
use super::withholding::compute_withholding;

/// Sums gross pay across the active roster and computes per-employee means.
///
/// An empty active roster yields [`PayrollTotals::zero`]; means are never
/// divided by zero.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::aggregate;
/// use payroll_engine::models::{Employee, TimeFrame};
/// use rust_decimal_macros::dec;
///
/// let mut employee = Employee::new("emp_001", "Diego Rivera");
/// employee.hourly_wage = dec!(20);
/// employee.hours_worked = dec!(40);
///
/// let totals = aggregate(&[employee], TimeFrame::Week);
/// assert_eq!(totals.grand_total, dec!(800));
/// assert_eq!(totals.avg_wage, dec!(20));
/// ```
pub fn aggregate(employees: &[Employee], time_frame: TimeFrame) -> PayrollTotals {
    let mut totals = PayrollTotals::zero(time_frame);

    for employee in employees.iter().filter(|e| e.is_active) {
        let breakdown = compute_gross_pay(employee);

        totals.active_employees += 1;
        totals.total_hours += employee.hours_worked;
        totals.total_overtime_hours += employee.overtime_hours;
        totals.total_regular_pay += breakdown.regular_pay;
        totals.total_base_pay += breakdown.base_pay;
        totals.total_overtime_pay += breakdown.overtime_pay;
        totals.total_tips += breakdown.tips_amount;
        totals.grand_total += breakdown.gross_total;
        totals.hourly_wage_sum += employee.hourly_wage;
    }

    if totals.active_employees == 0 {
        return totals;
    }

    let count = Decimal::from(totals.active_employees);
    totals.avg_wage = totals.hourly_wage_sum / count;
    totals.avg_hours = totals.total_hours / count;
    totals.avg_base_pay = totals.total_base_pay / count;
    totals.avg_overtime_pay = totals.total_overtime_pay / count;
    totals.avg_tips = totals.total_tips / count;
    totals.avg_gross_pay = totals.grand_total / count;

    debug!(
        time_frame = %time_frame,
        active_employees = totals.active_employees,
        grand_total = %totals.grand_total,
        "Aggregated roster"
    );

    totals
}

/// Computes gross pay and withholding for every active employee and sums
/// the results.
///
/// # Errors
///
/// Fails on the first active employee that is rejected by
/// [`Employee::validate`] or by the withholding calculation.
pub fn summarize_withholding(
    employees: &[Employee],
    frequency: PayFrequency,
    include_futa: bool,
    tax_year: &TaxYearConfig,
) -> EngineResult<WithholdingSummary> {
    let mut entries = Vec::new();
    let mut totals = TaxCalculationResult::zero();

    for employee in employees.iter().filter(|e| e.is_active) {
        employee.validate()?;

        let gross_pay = compute_gross_pay(employee);
        let taxes = compute_withholding(
            employee,
            gross_pay.gross_total,
            frequency,
            include_futa,
            tax_year,
        )?;

        totals.accumulate(&taxes);
        entries.push(EmployeeWithholding {
            employee_id: employee.id.clone(),
            gross_pay,
            taxes,
        });
    }

    debug!(
        frequency = %frequency,
        tax_year = tax_year.tax_year,
        employees = entries.len(),
        total_tax_liability = %totals.total_tax_liability,
        "Summarized withholding"
    );

    Ok(WithholdingSummary {
        frequency,
        tax_year: tax_year.tax_year,
        employees: entries,
        totals,
    })
}
