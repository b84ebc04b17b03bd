//! Configuration types for federal withholding.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files or built from the
//! compiled-in tax-year data.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{
    DEPENDENT_CREDIT_PER_DEPENDENT, FUTA_RATE, MEDICARE_RATE, SOCIAL_SECURITY_RATE,
};
use crate::error::{EngineError, EngineResult};
use crate::models::FilingStatus;

/// Metadata about the jurisdiction the tables belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JurisdictionMetadata {
    /// Short jurisdiction code (e.g., "US-FED").
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// URL to the official publication the tables come from.
    pub source_url: String,
}

/// One row of a Percentage Method table.
///
/// Wages of at least `over` are taxed `base_tax` plus `rate` times the
/// excess over `excess_over`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bracket {
    /// Lower bound of the adjusted annual wage range (inclusive).
    pub over: Decimal,
    /// Tax owed at the lower bound.
    pub base_tax: Decimal,
    /// Marginal rate applied to the excess.
    pub rate: Decimal,
    /// Amount the excess is measured from.
    pub excess_over: Decimal,
}

impl Bracket {
    /// Creates a bracket row.
    pub const fn new(over: Decimal, base_tax: Decimal, rate: Decimal, excess_over: Decimal) -> Self {
        Self {
            over,
            base_tax,
            rate,
            excess_over,
        }
    }

    /// Tentative annual tax on `wages` under this row.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::config::Bracket;
    /// use rust_decimal_macros::dec;
    ///
    /// let bracket = Bracket::new(dec!(26200), dec!(1160.00), dec!(0.12), dec!(26200));
    /// assert_eq!(bracket.tax_on(dec!(29900)), dec!(1604.00));
    /// ```
    pub fn tax_on(&self, wages: Decimal) -> Decimal {
        self.base_tax + (wages - self.excess_over) * self.rate
    }
}

/// An ordered Percentage Method table, lowest bracket first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BracketTable(Vec<Bracket>);

impl BracketTable {
    /// Wraps a list of brackets. Call [`BracketTable::validate`] before use.
    pub fn new(brackets: Vec<Bracket>) -> Self {
        Self(brackets)
    }

    /// The brackets, lowest first.
    pub fn brackets(&self) -> &[Bracket] {
        &self.0
    }

    /// Returns the bracket with the greatest lower bound not exceeding `wages`.
    ///
    /// Wages below every lower bound fall in the first bracket. Returns
    /// `None` only for an empty table.
    pub fn select(&self, wages: Decimal) -> Option<&Bracket> {
        self.0
            .iter()
            .rfind(|bracket| bracket.over <= wages)
            .or_else(|| self.0.first())
    }

    /// Checks that the table is non-empty, starts at zero, ascends strictly
    /// and that every rate lies in `[0, 1]`.
    pub fn validate(&self, name: &str) -> EngineResult<()> {
        let invalid = |message: String| EngineError::InvalidBracketTable {
            table: name.to_string(),
            message,
        };

        let first = self
            .0
            .first()
            .ok_or_else(|| invalid("table is empty".to_string()))?;
        if !first.over.is_zero() {
            return Err(invalid(format!(
                "first bracket must start at 0, starts at {}",
                first.over
            )));
        }

        for pair in self.0.windows(2) {
            if pair[1].over <= pair[0].over {
                return Err(invalid(format!(
                    "brackets must ascend: {} follows {}",
                    pair[1].over, pair[0].over
                )));
            }
        }

        if let Some(bracket) = self
            .0
            .iter()
            .find(|b| b.rate < Decimal::ZERO || b.rate > Decimal::ONE)
        {
            return Err(invalid(format!(
                "rate {} for bracket over {} is outside [0, 1]",
                bracket.rate, bracket.over
            )));
        }

        Ok(())
    }
}

/// One table per filing status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilingStatusTables {
    /// Single or married filing separately.
    pub single: BracketTable,
    /// Married filing jointly.
    pub married_joint: BracketTable,
    /// Head of household.
    pub head_household: BracketTable,
}

impl FilingStatusTables {
    /// Returns the table for a filing status.
    pub fn get(&self, filing_status: FilingStatus) -> &BracketTable {
        match filing_status {
            FilingStatus::Single => &self.single,
            FilingStatus::MarriedJoint => &self.married_joint,
            FilingStatus::HeadHousehold => &self.head_household,
        }
    }
}

/// The six Percentage Method tables of a tax year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketTables {
    /// Tables for a W-4 without the Step 2(c) box checked.
    pub standard: FilingStatusTables,
    /// Tables for a W-4 with the Step 2(c) box checked.
    pub step_2c_checkbox: FilingStatusTables,
}

impl BracketTables {
    /// Looks up the table keyed by filing status and the Step 2(c) checkbox.
    pub fn table_for(&self, filing_status: FilingStatus, multiple_jobs: bool) -> &BracketTable {
        if multiple_jobs {
            self.step_2c_checkbox.get(filing_status)
        } else {
            self.standard.get(filing_status)
        }
    }
}

/// Flat statutory rates for a tax year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryRates {
    /// Social Security rate, each of employee and employer.
    pub social_security: Decimal,
    /// Medicare rate, each of employee and employer.
    pub medicare: Decimal,
    /// Net FUTA rate after the state credit.
    pub futa: Decimal,
    /// W-4 Step 3 credit per qualifying child.
    pub dependent_credit_per_dependent: Decimal,
}

impl Default for StatutoryRates {
    fn default() -> Self {
        Self {
            social_security: SOCIAL_SECURITY_RATE,
            medicare: MEDICARE_RATE,
            futa: FUTA_RATE,
            dependent_credit_per_dependent: DEPENDENT_CREDIT_PER_DEPENDENT,
        }
    }
}

/// Everything the withholding calculation needs for one tax year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxYearConfig {
    /// The calendar tax year.
    pub tax_year: i32,
    /// First pay date these tables apply to.
    pub effective_date: NaiveDate,
    /// Statutory rates; the current federal rates when omitted.
    #[serde(default)]
    pub rates: StatutoryRates,
    /// The six Percentage Method tables.
    pub tables: BracketTables,
}

impl TaxYearConfig {
    /// Validates all six tables.
    pub fn validate(&self) -> EngineResult<()> {
        let groups = [
            ("standard", &self.tables.standard),
            ("step_2c_checkbox", &self.tables.step_2c_checkbox),
        ];
        for (group, tables) in groups {
            for status in FilingStatus::ALL {
                let name = format!("{}/{}/{}", self.tax_year, group, status);
                tables.get(status).validate(&name)?;
            }
        }
        Ok(())
    }
}

/// Federal withholding configuration across tax years.
///
/// Tax years are kept sorted by effective date so a pay date resolves to
/// the most recent table set in force.
#[derive(Debug, Clone, PartialEq)]
pub struct FederalTaxConfig {
    metadata: JurisdictionMetadata,
    tax_years: Vec<TaxYearConfig>,
}

impl FederalTaxConfig {
    /// Creates a configuration, validating every table.
    pub fn new(
        metadata: JurisdictionMetadata,
        tax_years: Vec<TaxYearConfig>,
    ) -> EngineResult<Self> {
        for tax_year in &tax_years {
            tax_year.validate()?;
        }

        let mut sorted = tax_years;
        sorted.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Ok(Self {
            metadata,
            tax_years: sorted,
        })
    }

    /// The compiled-in configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::config::FederalTaxConfig;
    ///
    /// let config = FederalTaxConfig::builtin();
    /// assert_eq!(config.latest().unwrap().tax_year, 2024);
    /// ```
    pub fn builtin() -> Self {
        Self {
            metadata: JurisdictionMetadata {
                code: "US-FED".to_string(),
                name: "U.S. Federal Income Tax Withholding".to_string(),
                source_url: "https://www.irs.gov/publications/p15t".to_string(),
            },
            tax_years: vec![TaxYearConfig::tax_year_2024()],
        }
    }

    /// Returns the jurisdiction metadata.
    pub fn metadata(&self) -> &JurisdictionMetadata {
        &self.metadata
    }

    /// Returns every configured tax year, oldest first.
    pub fn tax_years(&self) -> &[TaxYearConfig] {
        &self.tax_years
    }

    /// Returns the configuration for a calendar tax year.
    pub fn tax_year(&self, year: i32) -> EngineResult<&TaxYearConfig> {
        self.tax_years
            .iter()
            .find(|ty| ty.tax_year == year)
            .ok_or_else(|| EngineError::TaxYearNotFound {
                requested: format!("tax year {}", year),
            })
    }

    /// Returns the configuration in force on a pay date.
    pub fn tax_year_for(&self, pay_date: NaiveDate) -> EngineResult<&TaxYearConfig> {
        self.tax_years
            .iter()
            .rfind(|ty| ty.effective_date <= pay_date)
            .ok_or_else(|| EngineError::TaxYearNotFound {
                requested: format!("pay date {}", pay_date),
            })
    }

    /// Returns the most recent tax year.
    pub fn latest(&self) -> EngineResult<&TaxYearConfig> {
        self.tax_years
            .last()
            .ok_or_else(|| EngineError::TaxYearNotFound {
                requested: "latest tax year".to_string(),
            })
    }
}
