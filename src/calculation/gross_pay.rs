//! Gross pay calculation.
//!
//! This module computes an employee's gross taxable pay for one period from
//! role, hours, wage, salary and tips.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{AuditStep, Employee, GrossPayBreakdown, PayBasis};

/// Overtime hours are paid at 150% of the hourly wage.
pub const OVERTIME_MULTIPLIER: Decimal = dec!(1.5);

/// Computes an employee's gross pay for one period.
///
/// The formula is selected by [`PayBasis::for_employee`]:
///
/// - **BOH salaried**: gross is the salary. Hours and tips are ignored.
/// - **BOH hourly**: wage times hours, plus overtime hours at 1.5x the wage.
///   Tips are not added.
/// - **FOH hourly**: as BOH hourly, plus tips.
///
/// Values are multiplied through as given. Negative inputs and amounts above
/// [`MAX_AMOUNT`](crate::models::MAX_AMOUNT) are the caller's to reject (see
/// [`Employee::validate`]); past that cap the products can overflow.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_gross_pay;
/// use payroll_engine::models::Employee;
/// use rust_decimal_macros::dec;
///
/// let mut employee = Employee::new("emp_001", "Diego Rivera");
/// employee.hourly_wage = dec!(20);
/// employee.hours_worked = dec!(40);
/// employee.overtime_hours = dec!(5);
/// employee.tips = dec!(200);
///
/// let breakdown = compute_gross_pay(&employee);
/// assert_eq!(breakdown.base_pay, dec!(950));
/// assert_eq!(breakdown.gross_total, dec!(1150));
/// ```
pub fn compute_gross_pay(employee: &Employee) -> GrossPayBreakdown {
    let pay_basis = PayBasis::for_employee(employee);

    match pay_basis {
        PayBasis::BohSalaried => GrossPayBreakdown {
            pay_basis,
            regular_pay: employee.salary,
            overtime_pay: Decimal::ZERO,
            base_pay: employee.salary,
            tips_amount: Decimal::ZERO,
            gross_total: employee.salary,
        },
        PayBasis::FohHourly | PayBasis::BohHourly => {
            let regular_pay = employee.hourly_wage * employee.hours_worked;
            let overtime_pay = employee.overtime_hours * employee.hourly_wage * OVERTIME_MULTIPLIER;
            let base_pay = regular_pay + overtime_pay;
            let tips_amount = if pay_basis == PayBasis::FohHourly {
                employee.tips
            } else {
                Decimal::ZERO
            };

            GrossPayBreakdown {
                pay_basis,
                regular_pay,
                overtime_pay,
                base_pay,
                tips_amount,
                gross_total: base_pay + tips_amount,
            }
        }
    }
}

/// Records how a gross-pay breakdown was reached.
pub fn gross_pay_audit_step(
    employee: &Employee,
    breakdown: &GrossPayBreakdown,
    step_number: u32,
) -> AuditStep {
    let (reference, reasoning) = match breakdown.pay_basis {
        PayBasis::BohSalaried => (
            "Salaried BOH",
            format!(
                "BOH salary ${} is the gross pay; hours and tips are not counted",
                breakdown.gross_total.normalize()
            ),
        ),
        PayBasis::BohHourly => (
            "FLSA 29 U.S.C. 207(a)",
            format!(
                "{}h x ${} + {}h overtime x ${} x {} = ${}; BOH tips are not counted",
                employee.hours_worked.normalize(),
                employee.hourly_wage.normalize(),
                employee.overtime_hours.normalize(),
                employee.hourly_wage.normalize(),
                OVERTIME_MULTIPLIER,
                breakdown.gross_total.normalize()
            ),
        ),
        PayBasis::FohHourly => (
            "FLSA 29 U.S.C. 207(a)",
            format!(
                "{}h x ${} + {}h overtime x ${} x {} + ${} tips = ${}",
                employee.hours_worked.normalize(),
                employee.hourly_wage.normalize(),
                employee.overtime_hours.normalize(),
                employee.hourly_wage.normalize(),
                OVERTIME_MULTIPLIER,
                breakdown.tips_amount.normalize(),
                breakdown.gross_total.normalize()
            ),
        ),
    };

    AuditStep {
        step_number,
        rule_id: "gross_pay".to_string(),
        rule_name: "Gross Pay".to_string(),
        reference: reference.to_string(),
        input: serde_json::json!({
            "role": employee.role.to_string(),
            "hourly_wage": employee.hourly_wage.normalize().to_string(),
            "hours_worked": employee.hours_worked.normalize().to_string(),
            "overtime_hours": employee.overtime_hours.normalize().to_string(),
            "tips": employee.tips.normalize().to_string(),
            "salary": employee.salary.normalize().to_string()
        }),
        output: serde_json::json!({
            "pay_basis": breakdown.pay_basis,
            "base_pay": breakdown.base_pay.normalize().to_string(),
            "overtime_pay": breakdown.overtime_pay.normalize().to_string(),
            "tips_amount": breakdown.tips_amount.normalize().to_string(),
            "gross_total": breakdown.gross_total.normalize().to_string()
        }),
        reasoning,
    }
}
