//! Pay frequency and reporting time-frame types.
//!
//! [`PayFrequency`] drives annualization in the withholding calculation.
//! [`TimeFrame`] is the window a dashboard shows hours and tips for, and
//! carries the fixed multipliers used to rescale a roster between windows.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// How often an employee is paid.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayFrequency;
///
/// assert_eq!(PayFrequency::Biweekly.periods_per_year(), 26);
/// assert_eq!("semi_monthly".parse::<PayFrequency>().unwrap(), PayFrequency::SemiMonthly);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayFrequency {
    /// 52 pay periods per year.
    Weekly,
    /// 26 pay periods per year.
    Biweekly,
    /// 24 pay periods per year.
    SemiMonthly,
    /// 12 pay periods per year.
    Monthly,
    /// A single annual pay period.
    Annual,
}

impl PayFrequency {
    /// All pay frequencies, most frequent first.
    pub const ALL: [PayFrequency; 5] = [
        PayFrequency::Weekly,
        PayFrequency::Biweekly,
        PayFrequency::SemiMonthly,
        PayFrequency::Monthly,
        PayFrequency::Annual,
    ];

    /// Number of pay periods in a year at this frequency.
    pub fn periods_per_year(&self) -> u32 {
        match self {
            PayFrequency::Weekly => 52,
            PayFrequency::Biweekly => 26,
            PayFrequency::SemiMonthly => 24,
            PayFrequency::Monthly => 12,
            PayFrequency::Annual => 1,
        }
    }

    /// Returns the wire name of the frequency.
    pub fn as_str(&self) -> &'static str {
        match self {
            PayFrequency::Weekly => "weekly",
            PayFrequency::Biweekly => "biweekly",
            PayFrequency::SemiMonthly => "semi_monthly",
            PayFrequency::Monthly => "monthly",
            PayFrequency::Annual => "annual",
        }
    }
}

impl fmt::Display for PayFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayFrequency {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        PayFrequency::ALL
            .into_iter()
            .find(|frequency| frequency.as_str() == s)
            .ok_or_else(|| {
                EngineError::invalid_input(
                    "frequency",
                    format!(
                        "unrecognized value '{}', expected one of weekly, biweekly, semi_monthly, monthly, annual",
                        s
                    ),
                )
            })
    }
}

/// The reporting window a roster's hours and tips are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeFrame {
    /// A single working day.
    Day,
    /// One week.
    Week,
    /// Two weeks.
    Biweekly,
    /// One month.
    Month,
    /// One year.
    Year,
}

impl TimeFrame {
    /// All time frames, shortest first.
    pub const ALL: [TimeFrame; 5] = [
        TimeFrame::Day,
        TimeFrame::Week,
        TimeFrame::Biweekly,
        TimeFrame::Month,
        TimeFrame::Year,
    ];

    /// Length of the window measured in weeks.
    ///
    /// A day is a fifth of a five-day week and a month is 4.33 weeks.
    pub fn weeks(&self) -> Decimal {
        match self {
            TimeFrame::Day => dec!(0.2),
            TimeFrame::Week => dec!(1),
            TimeFrame::Biweekly => dec!(2),
            TimeFrame::Month => dec!(4.33),
            TimeFrame::Year => dec!(52),
        }
    }

    /// Returns the wire name of the time frame.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeFrame::Day => "day",
            TimeFrame::Week => "week",
            TimeFrame::Biweekly => "biweekly",
            TimeFrame::Month => "month",
            TimeFrame::Year => "year",
        }
    }
}

impl fmt::Display for TimeFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeFrame {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        TimeFrame::ALL
            .into_iter()
            .find(|frame| frame.as_str() == s)
            .ok_or_else(|| {
                EngineError::invalid_input(
                    "time_frame",
                    format!(
                        "unrecognized value '{}', expected one of day, week, biweekly, month, year",
                        s
                    ),
                )
            })
    }
}

impl TryFrom<TimeFrame> for PayFrequency {
    type Error = EngineError;

    /// Maps a reporting window onto the pay frequency of the same length.
    ///
    /// There is no daily pay frequency, so `Day` is rejected.
    fn try_from(frame: TimeFrame) -> EngineResult<Self> {
        match frame {
            TimeFrame::Day => Err(EngineError::invalid_input(
                "time_frame",
                "a daily window has no matching pay frequency",
            )),
            TimeFrame::Week => Ok(PayFrequency::Weekly),
            TimeFrame::Biweekly => Ok(PayFrequency::Biweekly),
            TimeFrame::Month => Ok(PayFrequency::Monthly),
            TimeFrame::Year => Ok(PayFrequency::Annual),
        }
    }
}
