//! Day stamps used as filename date tokens.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static DAY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

/// A `YYYY-MM-DD` date token, validated structurally.
///
/// The check is purely on shape: four digits, dash, two digits, dash, two
/// digits. Calendar-impossible stamps such as `2019-13-99` are accepted and
/// simply match no files on disk; `2019-5-01` or `20190501` are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DayStamp(String);

impl DayStamp {
    /// Parse a dashed day stamp.
    pub fn parse(s: &str) -> Result<Self, DayStampError> {
        if DAY_PATTERN.is_match(s) {
            Ok(DayStamp(s.to_string()))
        } else {
            Err(DayStampError::InvalidFormat(s.to_string()))
        }
    }

    /// Build from a calendar date.
    pub fn from_date(day: NaiveDate) -> Self {
        DayStamp(day.format("%Y-%m-%d").to_string())
    }

    /// The dashed `YYYY-MM-DD` form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The compact `YYYYMMDD` form, the prefix of every slot filename.
    pub fn compact(&self) -> String {
        self.0.replace('-', "")
    }
}

impl FromStr for DayStamp {
    type Err = DayStampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DayStamp::parse(s)
    }
}

impl fmt::Display for DayStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DayStampError {
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidFormat(String),
}
