//! Federal income tax withholding by the Percentage Method.
//!
//! Implements IRS Publication 15-T Worksheet 1A for Forms W-4 from 2020
//! onward: annualize the period's wages, adjust for Step 4 amounts, look up
//! the tentative annual tax in the table selected by filing status and the
//! Step 2(c) checkbox, subtract the Step 3 credit and spread the result back
//! over the pay periods of the year.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::config::{Bracket, BracketTables, StatutoryRates};
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, PayFrequency};

/// W-4 Step 3 credit for each qualifying child under 17.
pub const DEPENDENT_CREDIT_PER_DEPENDENT: Decimal = dec!(2000);

/// The annual W-4 Step 3 amount for a number of qualifying children.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::dependent_credit;
/// use payroll_engine::config::StatutoryRates;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(dependent_credit(2, &StatutoryRates::default()), dec!(4000));
/// ```
pub fn dependent_credit(dependents: u32, rates: &StatutoryRates) -> Decimal {
    Decimal::from(dependents) * rates.dependent_credit_per_dependent
}

/// Converts one period's wages to an adjusted annual wage amount.
///
/// `other_income` and `deductions` are already annual and are not scaled.
///
/// # Errors
///
/// `CalculationError` if the annual amount does not fit in a [`Decimal`].
pub fn annualize_wages(
    gross_pay: Decimal,
    frequency: PayFrequency,
    other_income: Decimal,
    deductions: Decimal,
) -> EngineResult<Decimal> {
    gross_pay
        .checked_mul(Decimal::from(frequency.periods_per_year()))
        .and_then(|wages| wages.checked_add(other_income))
        .and_then(|wages| wages.checked_sub(deductions))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("annualizing {} {} gross pay overflows", gross_pay, frequency),
        })
}

/// Intermediate and final figures of a federal income tax calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FederalIncomeTaxResult {
    /// Adjusted annual wage amount.
    pub annualized_wages: Decimal,
    /// The table row the wages fell in.
    pub bracket: Bracket,
    /// Annual tax before the Step 3 credit.
    pub tentative_annual_tax: Decimal,
    /// Annual tax after the Step 3 credit, never below zero.
    pub annual_withholding: Decimal,
    /// Per-period federal income tax.
    pub fed_income_tax: Decimal,
}

/// Calculates per-period federal income tax withholding.
///
/// # Errors
///
/// - `InvalidInput` if the employee has no filing status on record.
/// - `CalculationError` if the selected table has no brackets or the
///   annualized wages overflow.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_federal_income_tax;
/// use payroll_engine::config::TaxYearConfig;
/// use payroll_engine::models::{Employee, FilingStatus, PayFrequency};
/// use rust_decimal_macros::dec;
///
/// let mut employee = Employee::new("emp_001", "Diego Rivera");
/// employee.filing_status = Some(FilingStatus::Single);
///
/// let tables = TaxYearConfig::tax_year_2024().tables;
/// let result =
///     calculate_federal_income_tax(&employee, dec!(1150), PayFrequency::Biweekly, &tables)
///         .unwrap();
///
/// assert_eq!(result.annualized_wages, dec!(29900));
/// assert_eq!(result.tentative_annual_tax, dec!(1604.00));
/// assert_eq!(result.fed_income_tax.round_dp(2), dec!(61.69));
/// ```
pub fn calculate_federal_income_tax(
    employee: &Employee,
    gross_pay: Decimal,
    frequency: PayFrequency,
    tables: &BracketTables,
) -> EngineResult<FederalIncomeTaxResult> {
    let filing_status = employee.require_filing_status()?;

    let annualized_wages = annualize_wages(
        gross_pay,
        frequency,
        employee.other_income,
        employee.deductions,
    )?;

    let table = tables.table_for(filing_status, employee.multiple_jobs);
    let bracket = *table
        .select(annualized_wages)
        .ok_or_else(|| EngineError::CalculationError {
            message: format!(
                "no brackets configured for {} (multiple jobs: {})",
                filing_status, employee.multiple_jobs
            ),
        })?;

    let tentative_annual_tax = bracket.tax_on(annualized_wages);
    let annual_withholding =
        (tentative_annual_tax - employee.dependent_amount_usd).max(Decimal::ZERO);
    let fed_income_tax = annual_withholding / Decimal::from(frequency.periods_per_year());

    Ok(FederalIncomeTaxResult {
        annualized_wages,
        bracket,
        tentative_annual_tax,
        annual_withholding,
        fed_income_tax,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TaxYearConfig;
    use crate::models::FilingStatus;
    use proptest::prelude::*;

    fn tables() -> BracketTables {
        TaxYearConfig::tax_year_2024().tables
    }

    fn filer(status: FilingStatus, multiple_jobs: bool) -> Employee {
        let mut employee = Employee::new("emp_001", "Test Filer");
        employee.filing_status = Some(status);
        employee.multiple_jobs = multiple_jobs;
        employee
    }

    #[test]
    fn test_single_standard_biweekly_1150() {
        let employee = filer(FilingStatus::Single, false);
        let result =
            calculate_federal_income_tax(&employee, dec!(1150), PayFrequency::Biweekly, &tables())
                .unwrap();

        assert_eq!(result.annualized_wages, dec!(29900));
        assert_eq!(result.bracket.over, dec!(26200));
        assert_eq!(result.tentative_annual_tax, dec!(1604.00));
        assert_eq!(result.annual_withholding, dec!(1604.00));
        assert_eq!(result.fed_income_tax.round_dp(2), dec!(61.69));
    }

    #[test]
    fn test_annualize_overflow_is_a_calculation_error() {
        let employee = filer(FilingStatus::Single, false);
        let err = calculate_federal_income_tax(
            &employee,
            dec!(2_000_000_000_000_000_000_000_000_000),
            PayFrequency::Weekly,
            &tables(),
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::CalculationError { .. }));
    }

    #[test]
    fn test_wages_below_first_taxable_bracket_owe_nothing() {
        let employee = filer(FilingStatus::Single, false);
        let result =
            calculate_federal_income_tax(&employee, dec!(500), PayFrequency::Biweekly, &tables())
                .unwrap();

        assert_eq!(result.annualized_wages, dec!(13000));
        assert_eq!(result.bracket.over, Decimal::ZERO);
        assert_eq!(result.fed_income_tax, Decimal::ZERO);
    }

    #[test]
    fn test_checkbox_withholds_more_than_standard() {
        let standard = calculate_federal_income_tax(
            &filer(FilingStatus::Single, false),
            dec!(1150),
            PayFrequency::Biweekly,
            &tables(),
        )
        .unwrap();
        let checkbox = calculate_federal_income_tax(
            &filer(FilingStatus::Single, true),
            dec!(1150),
            PayFrequency::Biweekly,
            &tables(),
        )
        .unwrap();

        // 29900 falls in [14400, 32175): 580 + 15500 * 0.12 = 2440
        assert_eq!(checkbox.tentative_annual_tax, dec!(2440.00));
        assert!(checkbox.fed_income_tax > standard.fed_income_tax);
    }

    #[test]
    fn test_married_joint_standard_monthly() {
        let employee = filer(FilingStatus::MarriedJoint, false);
        let result =
            calculate_federal_income_tax(&employee, dec!(6000), PayFrequency::Monthly, &tables())
                .unwrap();

        // 72000 falls in [52400, 123500): 2320 + (72000 - 52400) * 0.12 = 4672
        assert_eq!(result.annualized_wages, dec!(72000));
        assert_eq!(result.tentative_annual_tax, dec!(4672.00));
        assert_eq!(result.fed_income_tax.round_dp(2), dec!(389.33));
    }

    #[test]
    fn test_head_household_weekly() {
        let employee = filer(FilingStatus::HeadHousehold, false);
        let result =
            calculate_federal_income_tax(&employee, dec!(1000), PayFrequency::Weekly, &tables())
                .unwrap();

        // 52000 falls in [38400, 85000): 1650 + 13600 * 0.12 = 3282
        assert_eq!(result.tentative_annual_tax, dec!(3282.00));
        assert_eq!(result.fed_income_tax.round_dp(2), dec!(63.12));
    }

    #[test]
    fn test_other_income_and_deductions_are_annual() {
        let mut employee = filer(FilingStatus::Single, false);
        employee.other_income = dec!(5000);
        employee.deductions = dec!(2000);
        let result =
            calculate_federal_income_tax(&employee, dec!(1150), PayFrequency::Biweekly, &tables())
                .unwrap();

        assert_eq!(result.annualized_wages, dec!(32900));
        // 1160 + (32900 - 26200) * 0.12 = 1964
        assert_eq!(result.tentative_annual_tax, dec!(1964.00));
    }

    #[test]
    fn test_dependent_credit_reduces_tax() {
        let mut employee = filer(FilingStatus::Single, false);
        employee.dependent_amount_usd = dec!(1000);
        let result =
            calculate_federal_income_tax(&employee, dec!(1150), PayFrequency::Biweekly, &tables())
                .unwrap();

        assert_eq!(result.annual_withholding, dec!(604.00));
        assert_eq!(result.fed_income_tax.round_dp(2), dec!(23.23));
    }

    #[test]
    fn test_dependent_credit_clamps_at_zero() {
        let mut employee = filer(FilingStatus::Single, false);
        employee.dependent_amount_usd = dec!(4000);
        let result =
            calculate_federal_income_tax(&employee, dec!(1150), PayFrequency::Biweekly, &tables())
                .unwrap();

        assert_eq!(result.tentative_annual_tax, dec!(1604.00));
        assert_eq!(result.annual_withholding, Decimal::ZERO);
        assert_eq!(result.fed_income_tax, Decimal::ZERO);
    }

    #[test]
    fn test_deductions_exceeding_wages_owe_nothing() {
        let mut employee = filer(FilingStatus::Single, false);
        employee.deductions = dec!(50000);
        let result =
            calculate_federal_income_tax(&employee, dec!(1150), PayFrequency::Biweekly, &tables())
                .unwrap();

        assert!(result.annualized_wages < Decimal::ZERO);
        assert_eq!(result.bracket.over, Decimal::ZERO);
        assert_eq!(result.fed_income_tax, Decimal::ZERO);
    }

    #[test]
    fn test_missing_filing_status_is_invalid_input() {
        let employee = Employee::new("emp_009", "No W-4");
        match calculate_federal_income_tax(&employee, dec!(1150), PayFrequency::Weekly, &tables()) {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "filing_status"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_annual_frequency_is_not_rescaled() {
        let employee = filer(FilingStatus::Single, false);
        let result =
            calculate_federal_income_tax(&employee, dec!(29900), PayFrequency::Annual, &tables())
                .unwrap();
        assert_eq!(result.fed_income_tax, dec!(1604.00));
    }

    #[test]
    fn test_dependent_credit_per_child() {
        let rates = StatutoryRates::default();
        assert_eq!(dependent_credit(0, &rates), Decimal::ZERO);
        assert_eq!(dependent_credit(3, &rates), dec!(6000));
    }

    fn status() -> impl Strategy<Value = FilingStatus> {
        prop_oneof![
            Just(FilingStatus::Single),
            Just(FilingStatus::MarriedJoint),
            Just(FilingStatus::HeadHousehold),
        ]
    }

    fn frequency() -> impl Strategy<Value = PayFrequency> {
        prop_oneof![
            Just(PayFrequency::Weekly),
            Just(PayFrequency::Biweekly),
            Just(PayFrequency::SemiMonthly),
            Just(PayFrequency::Monthly),
            Just(PayFrequency::Annual),
        ]
    }

    proptest! {
        // Standard tables are continuous at every bound; the checkbox tables
        // carry IRS rounding and can step down by cents.
        #[test]
        fn prop_standard_tax_is_non_decreasing_in_wages(
            status in status(),
            frequency in frequency(),
            low_cents in 0i64..2_000_000_00,
            raise_cents in 0i64..500_000_00,
        ) {
            let employee = filer(status, false);
            let low = Decimal::new(low_cents, 2);
            let high = low + Decimal::new(raise_cents, 2);

            let at_low = calculate_federal_income_tax(&employee, low, frequency, &tables()).unwrap();
            let at_high = calculate_federal_income_tax(&employee, high, frequency, &tables()).unwrap();

            prop_assert!(at_high.tentative_annual_tax >= at_low.tentative_annual_tax);
            prop_assert!(at_high.fed_income_tax >= at_low.fed_income_tax);
        }

        #[test]
        fn prop_dependent_credit_never_increases_or_negates_tax(
            status in status(),
            multiple_jobs in any::<bool>(),
            gross_cents in 0i64..1_000_000_00,
            credit in 0i64..20_000,
        ) {
            let without = filer(status, multiple_jobs);
            let mut with = without.clone();
            with.dependent_amount_usd = Decimal::from(credit);

            let gross = Decimal::new(gross_cents, 2);
            let base = calculate_federal_income_tax(&without, gross, PayFrequency::Biweekly, &tables()).unwrap();
            let credited = calculate_federal_income_tax(&with, gross, PayFrequency::Biweekly, &tables()).unwrap();

            prop_assert!(credited.fed_income_tax <= base.fed_income_tax);
            prop_assert!(credited.fed_income_tax >= Decimal::ZERO);
        }
    }
}
