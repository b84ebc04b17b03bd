//! FICA and FUTA calculation.
//!
//! Social Security and Medicare are charged at the same flat rate to both
//! employee and employer. FUTA is employer-only and optional.
//!
//! Neither the Social Security wage base nor the $7,000 FUTA wage base is
//! tracked: there is no year-to-date state, so every period is taxed in full.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::config::StatutoryRates;

/// Social Security rate, charged to each of employee and employer.
pub const SOCIAL_SECURITY_RATE: Decimal = dec!(0.062);

/// Medicare rate, charged to each of employee and employer.
pub const MEDICARE_RATE: Decimal = dec!(0.0145);

/// Net FUTA rate after the maximum state credit.
pub const FUTA_RATE: Decimal = dec!(0.006);

/// Social Security and Medicare shares for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FicaAmounts {
    /// Social Security withheld from the employee.
    pub ss_employee: Decimal,
    /// Social Security owed by the employer.
    pub ss_employer: Decimal,
    /// Medicare withheld from the employee.
    pub med_employee: Decimal,
    /// Medicare owed by the employer.
    pub med_employer: Decimal,
}

/// Calculates both shares of Social Security and Medicare on gross pay.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_fica;
/// use payroll_engine::config::StatutoryRates;
/// use rust_decimal_macros::dec;
///
/// let fica = calculate_fica(dec!(1000), &StatutoryRates::default());
/// assert_eq!(fica.ss_employee, dec!(62));
/// assert_eq!(fica.med_employer, dec!(14.5));
/// ```
pub fn calculate_fica(gross_pay: Decimal, rates: &StatutoryRates) -> FicaAmounts {
    let social_security = gross_pay * rates.social_security;
    let medicare = gross_pay * rates.medicare;

    FicaAmounts {
        ss_employee: social_security,
        ss_employer: social_security,
        med_employee: medicare,
        med_employer: medicare,
    }
}

/// Calculates the employer's FUTA liability, or zero when not requested.
pub fn calculate_futa(gross_pay: Decimal, include_futa: bool, rates: &StatutoryRates) -> Decimal {
    if include_futa {
        gross_pay * rates.futa
    } else {
        Decimal::ZERO
    }
}
