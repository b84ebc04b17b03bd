//! Time-frame rescaling.
//!
//! Converts an employee's stored hours, tips and salary from one reporting
//! window to another using the fixed week multipliers of [`TimeFrame::weeks`].

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{Employee, TimeFrame};

const HOURS_DP: u32 = 1;
const CURRENCY_DP: u32 = 2;

/// Returns a copy of `employee` with period amounts rescaled from `from` to `to`.
///
/// Hours round to one decimal place and currency to two. Hourly wage and
/// W-4 fields are untouched. Rescaling to the same window returns the
/// record unchanged.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::rescale_employee;
/// use payroll_engine::models::{Employee, TimeFrame};
/// use rust_decimal_macros::dec;
///
/// let mut employee = Employee::new("emp_001", "Diego Rivera");
/// employee.hours_worked = dec!(40);
/// employee.tips = dec!(200);
///
/// let monthly = rescale_employee(&employee, TimeFrame::Week, TimeFrame::Month);
/// assert_eq!(monthly.hours_worked, dec!(173.2));
/// assert_eq!(monthly.tips, dec!(866.00));
/// ```
pub fn rescale_employee(employee: &Employee, from: TimeFrame, to: TimeFrame) -> Employee {
    if from == to {
        return employee.clone();
    }

    let factor = to.weeks() / from.weeks();
    let scale = |value: Decimal, dp: u32| {
        (value * factor).round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
    };

    Employee {
        hours_worked: scale(employee.hours_worked, HOURS_DP),
        overtime_hours: scale(employee.overtime_hours, HOURS_DP),
        tips: scale(employee.tips, CURRENCY_DP),
        salary: scale(employee.salary, CURRENCY_DP),
        ..employee.clone()
    }
}

/// Rescales every employee of a roster.
pub fn rescale_employees(employees: &[Employee], from: TimeFrame, to: TimeFrame) -> Vec<Employee> {
    employees
        .iter()
        .map(|employee| rescale_employee(employee, from, to))
        .collect()
}
