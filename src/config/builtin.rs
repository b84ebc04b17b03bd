//! Compiled-in 2024 Percentage Method tables.
//!
//! Annual-basis tables for automated payroll systems, IRS Publication 15-T
//! (2024). Rows are `(over, base_tax, rate, excess_over)`.

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::types::{
    Bracket, BracketTable, BracketTables, FilingStatusTables, StatutoryRates, TaxYearConfig,
};

const SINGLE_STANDARD_2024: [Bracket; 8] = [
    Bracket::new(dec!(0), dec!(0), dec!(0), dec!(0)),
    Bracket::new(dec!(14600), dec!(0), dec!(0.10), dec!(14600)),
    Bracket::new(dec!(26200), dec!(1160.00), dec!(0.12), dec!(26200)),
    Bracket::new(dec!(61750), dec!(5426.00), dec!(0.22), dec!(61750)),
    Bracket::new(dec!(115125), dec!(17168.50), dec!(0.24), dec!(115125)),
    Bracket::new(dec!(206550), dec!(39110.50), dec!(0.32), dec!(206550)),
    Bracket::new(dec!(258325), dec!(55678.50), dec!(0.35), dec!(258325)),
    Bracket::new(dec!(623950), dec!(183647.25), dec!(0.37), dec!(623950)),
];

const MARRIED_JOINT_STANDARD_2024: [Bracket; 8] = [
    Bracket::new(dec!(0), dec!(0), dec!(0), dec!(0)),
    Bracket::new(dec!(29200), dec!(0), dec!(0.10), dec!(29200)),
    Bracket::new(dec!(52400), dec!(2320.00), dec!(0.12), dec!(52400)),
    Bracket::new(dec!(123500), dec!(10852.00), dec!(0.22), dec!(123500)),
    Bracket::new(dec!(230250), dec!(34337.00), dec!(0.24), dec!(230250)),
    Bracket::new(dec!(413100), dec!(78221.00), dec!(0.32), dec!(413100)),
    Bracket::new(dec!(516650), dec!(111357.00), dec!(0.35), dec!(516650)),
    Bracket::new(dec!(760400), dec!(196669.50), dec!(0.37), dec!(760400)),
];

const HEAD_HOUSEHOLD_STANDARD_2024: [Bracket; 8] = [
    Bracket::new(dec!(0), dec!(0), dec!(0), dec!(0)),
    Bracket::new(dec!(21900), dec!(0), dec!(0.10), dec!(21900)),
    Bracket::new(dec!(38400), dec!(1650.00), dec!(0.12), dec!(38400)),
    Bracket::new(dec!(85000), dec!(7242.00), dec!(0.22), dec!(85000)),
    Bracket::new(dec!(117150), dec!(14315.00), dec!(0.24), dec!(117150)),
    Bracket::new(dec!(208575), dec!(36257.00), dec!(0.32), dec!(208575)),
    Bracket::new(dec!(260350), dec!(52825.00), dec!(0.35), dec!(260350)),
    Bracket::new(dec!(625975), dec!(180793.75), dec!(0.37), dec!(625975)),
];

const SINGLE_CHECKBOX_2024: [Bracket; 8] = [
    Bracket::new(dec!(0), dec!(0), dec!(0), dec!(0)),
    Bracket::new(dec!(8600), dec!(0), dec!(0.10), dec!(8600)),
    Bracket::new(dec!(14400), dec!(580.00), dec!(0.12), dec!(14400)),
    Bracket::new(dec!(32175), dec!(2713.00), dec!(0.22), dec!(32175)),
    Bracket::new(dec!(58863), dec!(8584.25), dec!(0.24), dec!(58863)),
    Bracket::new(dec!(104575), dec!(19555.25), dec!(0.32), dec!(104575)),
    Bracket::new(dec!(130463), dec!(27839.25), dec!(0.35), dec!(130463)),
    Bracket::new(dec!(313275), dec!(91823.50), dec!(0.37), dec!(313275)),
];

// Married filing jointly with the checkbox uses the single standard schedule.
const MARRIED_JOINT_CHECKBOX_2024: [Bracket; 8] = SINGLE_STANDARD_2024;

const HEAD_HOUSEHOLD_CHECKBOX_2024: [Bracket; 8] = [
    Bracket::new(dec!(0), dec!(0), dec!(0), dec!(0)),
    Bracket::new(dec!(12250), dec!(0), dec!(0.10), dec!(12250)),
    Bracket::new(dec!(20500), dec!(825.00), dec!(0.12), dec!(20500)),
    Bracket::new(dec!(43800), dec!(3621.00), dec!(0.22), dec!(43800)),
    Bracket::new(dec!(59875), dec!(7157.50), dec!(0.24), dec!(59875)),
    Bracket::new(dec!(105588), dec!(18128.50), dec!(0.32), dec!(105588)),
    Bracket::new(dec!(131475), dec!(26412.50), dec!(0.35), dec!(131475)),
    Bracket::new(dec!(314288), dec!(90396.88), dec!(0.37), dec!(314288)),
];

impl TaxYearConfig {
    /// The 2024 tables and statutory rates.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::config::TaxYearConfig;
    /// use payroll_engine::models::FilingStatus;
    /// use rust_decimal_macros::dec;
    ///
    /// let config = TaxYearConfig::tax_year_2024();
    /// let table = config.tables.table_for(FilingStatus::Single, false);
    /// assert_eq!(table.select(dec!(29900)).unwrap().base_tax, dec!(1160.00));
    /// ```
    pub fn tax_year_2024() -> Self {
        Self {
            tax_year: 2024,
            effective_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            rates: StatutoryRates::default(),
            tables: BracketTables {
                standard: FilingStatusTables {
                    single: BracketTable::new(SINGLE_STANDARD_2024.to_vec()),
                    married_joint: BracketTable::new(MARRIED_JOINT_STANDARD_2024.to_vec()),
                    head_household: BracketTable::new(HEAD_HOUSEHOLD_STANDARD_2024.to_vec()),
                },
                step_2c_checkbox: FilingStatusTables {
                    single: BracketTable::new(SINGLE_CHECKBOX_2024.to_vec()),
                    married_joint: BracketTable::new(MARRIED_JOINT_CHECKBOX_2024.to_vec()),
                    head_household: BracketTable::new(HEAD_HOUSEHOLD_CHECKBOX_2024.to_vec()),
                },
            },
        }
    }
}
