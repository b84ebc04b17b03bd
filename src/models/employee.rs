//! Employee model and related types.
//!
//! This module defines the [`Employee`] record as the engine consumes it,
//! together with the [`Role`] and [`FilingStatus`] enums that select the
//! gross-pay formula and the withholding bracket table.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{EngineError, EngineResult};

/// Largest amount accepted for any employee field.
///
/// Keeps every product and roster sum the engine forms well inside
/// [`Decimal::MAX`].
pub const MAX_AMOUNT: Decimal = dec!(1_000_000_000);

/// Restaurant staff classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Front of house: hourly, tipped.
    #[default]
    #[serde(rename = "FOH")]
    Foh,
    /// Back of house: salaried or hourly, tips never counted toward gross.
    #[serde(rename = "BOH")]
    Boh,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Foh => write!(f, "FOH"),
            Role::Boh => write!(f, "BOH"),
        }
    }
}

impl FromStr for Role {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FOH" => Ok(Role::Foh),
            "BOH" => Ok(Role::Boh),
            _ => Err(EngineError::invalid_input(
                "role",
                format!("unrecognized value '{}', expected FOH or BOH", s),
            )),
        }
    }
}

/// Form W-4 Step 1(c) filing status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilingStatus {
    /// Single or married filing separately.
    Single,
    /// Married filing jointly or qualifying surviving spouse.
    MarriedJoint,
    /// Head of household.
    HeadHousehold,
}

impl FilingStatus {
    /// All filing statuses, in table order.
    pub const ALL: [FilingStatus; 3] = [
        FilingStatus::Single,
        FilingStatus::MarriedJoint,
        FilingStatus::HeadHousehold,
    ];

    /// Returns the wire name of the filing status.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilingStatus::Single => "single",
            FilingStatus::MarriedJoint => "married_joint",
            FilingStatus::HeadHousehold => "head_household",
        }
    }
}

impl fmt::Display for FilingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilingStatus {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        FilingStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                EngineError::invalid_input(
                    "filing_status",
                    format!(
                        "unrecognized value '{}', expected one of single, married_joint, head_household",
                        s
                    ),
                )
            })
    }
}

/// Deserializes an absent or `null` amount as zero.
fn null_as_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Decimal>::deserialize(deserializer)?.unwrap_or_default())
}

/// An employee record as consumed by the engine.
///
/// Amounts are per pay period except the W-4 Step 3/4 fields
/// (`dependent_amount_usd`, `other_income`, `deductions`), which are annual.
/// Absent or `null` amounts read as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// The restaurant this employee is rostered at, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_id: Option<String>,
    /// Staff classification.
    #[serde(default)]
    pub role: Role,
    /// Hourly wage.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub hourly_wage: Decimal,
    /// Regular hours worked in the period.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub hours_worked: Decimal,
    /// Overtime hours worked in the period.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub overtime_hours: Decimal,
    /// Tips received in the period.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub tips: Decimal,
    /// Fixed salary for the period; only honoured for BOH staff.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub salary: Decimal,
    /// Inactive employees are left out of every rollup.
    pub is_active: bool,
    /// W-4 filing status. Required before withholding can be estimated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filing_status: Option<FilingStatus>,
    /// W-4 Step 2(c) checkbox.
    #[serde(default)]
    pub multiple_jobs: bool,
    /// W-4 Step 3 annual credit for dependents.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub dependent_amount_usd: Decimal,
    /// W-4 Step 4(a) annual other income.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub other_income: Decimal,
    /// W-4 Step 4(b) annual deductions.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub deductions: Decimal,
}

impl Employee {
    /// Creates an active FOH employee with every amount at zero and no W-4 data.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{Employee, Role};
    ///
    /// let employee = Employee::new("emp_001", "Diego Rivera");
    /// assert_eq!(employee.role, Role::Foh);
    /// assert!(employee.is_active);
    /// ```
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            restaurant_id: None,
            role: Role::Foh,
            hourly_wage: Decimal::ZERO,
            hours_worked: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            tips: Decimal::ZERO,
            salary: Decimal::ZERO,
            is_active: true,
            filing_status: None,
            multiple_jobs: false,
            dependent_amount_usd: Decimal::ZERO,
            other_income: Decimal::ZERO,
            deductions: Decimal::ZERO,
        }
    }

    /// Returns true if the employee is paid a fixed salary.
    pub fn is_salaried(&self) -> bool {
        self.role == Role::Boh && self.salary > Decimal::ZERO
    }

    /// Returns the W-4 filing status, or `InvalidInput` when none was recorded.
    pub fn require_filing_status(&self) -> EngineResult<FilingStatus> {
        self.filing_status.ok_or_else(|| {
            EngineError::invalid_input(
                "filing_status",
                format!("employee '{}' has no W-4 filing status on record", self.id),
            )
        })
    }

    /// Rejects negative amounts and amounts above [`MAX_AMOUNT`].
    ///
    /// The gross-pay calculation multiplies whatever it is given; callers
    /// that accept records from outside validate them here first.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let mut employee = Employee::new("emp_001", "Diego Rivera");
    /// assert!(employee.validate().is_ok());
    ///
    /// employee.hours_worked = Decimal::NEGATIVE_ONE;
    /// assert!(employee.validate().is_err());
    ///
    /// employee.hours_worked = Decimal::MAX;
    /// assert!(employee.validate().is_err());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        let amounts = [
            ("hourly_wage", self.hourly_wage),
            ("hours_worked", self.hours_worked),
            ("overtime_hours", self.overtime_hours),
            ("tips", self.tips),
            ("salary", self.salary),
            ("dependent_amount_usd", self.dependent_amount_usd),
            ("other_income", self.other_income),
            ("deductions", self.deductions),
        ];

        for (field, value) in amounts {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(EngineError::invalid_input(
                    field,
                    format!("must not be negative (employee '{}', got {})", self.id, value),
                ));
            }
            if value > MAX_AMOUNT {
                return Err(EngineError::invalid_input(
                    field,
                    format!(
                        "must not exceed {} (employee '{}', got {})",
                        MAX_AMOUNT, self.id, value
                    ),
                ));
            }
        }
        Ok(())
    }
}
