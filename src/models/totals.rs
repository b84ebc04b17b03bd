//! Roster-level rollups.
//!
//! [`PayrollTotals`] sums gross-pay breakdowns across the active roster, and
//! [`WithholdingSummary`] sums withholding results. Both are derived values,
//! rebuilt from the roster on every request.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{GrossPayBreakdown, PayFrequency, TaxCalculationResult, TimeFrame};

/// Gross-pay totals and per-employee means for the active roster.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayrollTotals, TimeFrame};
/// use rust_decimal::Decimal;
///
/// let totals = PayrollTotals::zero(TimeFrame::Week);
/// assert_eq!(totals.active_employees, 0);
/// assert_eq!(totals.avg_wage, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollTotals {
    /// The window the roster's hours and tips are expressed in.
    pub time_frame: TimeFrame,
    /// Number of active employees included.
    pub active_employees: u32,
    /// Regular hours worked.
    pub total_hours: Decimal,
    /// Overtime hours worked.
    pub total_overtime_hours: Decimal,
    /// Straight-time pay, salaries included.
    pub total_regular_pay: Decimal,
    /// Regular plus overtime pay.
    pub total_base_pay: Decimal,
    /// Overtime premium pay.
    pub total_overtime_pay: Decimal,
    /// Tips counted toward gross.
    pub total_tips: Decimal,
    /// Sum of every active employee's gross pay.
    pub grand_total: Decimal,
    /// Sum of hourly wages.
    pub hourly_wage_sum: Decimal,
    /// Mean hourly wage.
    pub avg_wage: Decimal,
    /// Mean regular hours.
    pub avg_hours: Decimal,
    /// Mean base pay.
    pub avg_base_pay: Decimal,
    /// Mean overtime pay.
    pub avg_overtime_pay: Decimal,
    /// Mean tips.
    pub avg_tips: Decimal,
    /// Mean gross pay.
    pub avg_gross_pay: Decimal,
}

impl PayrollTotals {
    /// Totals for an empty roster.
    pub fn zero(time_frame: TimeFrame) -> Self {
        Self {
            time_frame,
            active_employees: 0,
            total_hours: Decimal::ZERO,
            total_overtime_hours: Decimal::ZERO,
            total_regular_pay: Decimal::ZERO,
            total_base_pay: Decimal::ZERO,
            total_overtime_pay: Decimal::ZERO,
            total_tips: Decimal::ZERO,
            grand_total: Decimal::ZERO,
            hourly_wage_sum: Decimal::ZERO,
            avg_wage: Decimal::ZERO,
            avg_hours: Decimal::ZERO,
            avg_base_pay: Decimal::ZERO,
            avg_overtime_pay: Decimal::ZERO,
            avg_tips: Decimal::ZERO,
            avg_gross_pay: Decimal::ZERO,
        }
    }
}

/// One employee's line in a [`WithholdingSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeWithholding {
    /// The employee the line belongs to.
    pub employee_id: String,
    /// How the gross pay was built.
    pub gross_pay: GrossPayBreakdown,
    /// Estimated taxes on that gross pay.
    pub taxes: TaxCalculationResult,
}

/// Withholding estimates for the active roster, with summed totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithholdingSummary {
    /// Pay frequency every line was computed at.
    pub frequency: PayFrequency,
    /// Tax year whose tables were used.
    pub tax_year: i32,
    /// Per-employee lines, in roster order.
    pub employees: Vec<EmployeeWithholding>,
    /// Field-by-field sum of every line's taxes.
    pub totals: TaxCalculationResult,
}
