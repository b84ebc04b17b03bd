//! Gross pay breakdown produced by the wage calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Employee, Role};

/// The gross-pay formula that applies to an employee.
///
/// Exactly one basis applies per employee per period, chosen by role and
/// salary alone.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Employee, PayBasis, Role};
/// use rust_decimal_macros::dec;
///
/// let mut employee = Employee::new("emp_001", "Frida");
/// assert_eq!(PayBasis::for_employee(&employee), PayBasis::FohHourly);
///
/// employee.role = Role::Boh;
/// assert_eq!(PayBasis::for_employee(&employee), PayBasis::BohHourly);
///
/// employee.salary = dec!(2000);
/// assert_eq!(PayBasis::for_employee(&employee), PayBasis::BohSalaried);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayBasis {
    /// Hourly plus overtime plus tips.
    FohHourly,
    /// Fixed salary; hours and tips do not change gross.
    BohSalaried,
    /// Hourly plus overtime; tips are not added.
    BohHourly,
}

impl PayBasis {
    /// Selects the basis for an employee.
    pub fn for_employee(employee: &Employee) -> Self {
        match employee.role {
            Role::Boh if employee.salary > Decimal::ZERO => PayBasis::BohSalaried,
            Role::Boh => PayBasis::BohHourly,
            Role::Foh => PayBasis::FohHourly,
        }
    }
}

/// Components of an employee's gross pay for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrossPayBreakdown {
    /// The formula that produced this breakdown.
    pub pay_basis: PayBasis,
    /// Straight-time pay (the salary on the salaried basis).
    pub regular_pay: Decimal,
    /// Overtime premium pay.
    pub overtime_pay: Decimal,
    /// Regular plus overtime pay.
    pub base_pay: Decimal,
    /// Tips counted toward gross; zero for BOH staff.
    pub tips_amount: Decimal,
    /// Total taxable gross pay.
    pub gross_total: Decimal,
}

impl GrossPayBreakdown {
    /// A breakdown with every amount at zero.
    pub fn zero(pay_basis: PayBasis) -> Self {
        Self {
            pay_basis,
            regular_pay: Decimal::ZERO,
            overtime_pay: Decimal::ZERO,
            base_pay: Decimal::ZERO,
            tips_amount: Decimal::ZERO,
            gross_total: Decimal::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pay_basis_serialization() {
        assert_eq!(
            serde_json::to_string(&PayBasis::BohSalaried).unwrap(),
            "\"boh_salaried\""
        );
        let basis: PayBasis = serde_json::from_str("\"foh_hourly\"").unwrap();
        assert_eq!(basis, PayBasis::FohHourly);
    }

    #[test]
    fn test_foh_with_salary_stays_hourly() {
        let mut employee = Employee::new("emp_001", "Cristina Kahlo");
        employee.salary = Decimal::new(2000, 0);
        assert_eq!(PayBasis::for_employee(&employee), PayBasis::FohHourly);
    }

    #[test]
    fn test_zero_breakdown() {
        let breakdown = GrossPayBreakdown::zero(PayBasis::BohHourly);
        assert_eq!(breakdown.gross_total, Decimal::ZERO);
        assert_eq!(breakdown.pay_basis, PayBasis::BohHourly);
    }

    #[test]
    fn test_breakdown_serializes_amounts_as_strings() {
        let mut breakdown = GrossPayBreakdown::zero(PayBasis::FohHourly);
        breakdown.gross_total = Decimal::new(115000, 2);
        let json = serde_json::to_string(&breakdown).unwrap();
        assert!(json.contains("\"gross_total\":\"1150.00\""));
        assert!(json.contains("\"pay_basis\":\"foh_hourly\""));
    }
}
