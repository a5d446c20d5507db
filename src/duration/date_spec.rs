use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::error::DurationError;

const SEPARATOR: char = '-';

/// A calendar point at month granularity.
/// Month is stored 0-indexed (January = 0); ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month0: u32,
}

impl YearMonth {
    /// Build from a 1-indexed month. Returns None when month is outside 1..=12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self {
                year,
                month0: month - 1,
            })
        } else {
            None
        }
    }

    /// Month granularity of a calendar date; the day is discarded.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month0: date.month0(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// 1-indexed month, as written in date strings.
    pub fn month(&self) -> u32 {
        self.month0 + 1
    }

    pub fn month0(&self) -> u32 {
        self.month0
    }

    /// Signed number of months from `self` to `other`, exclusive of the end month.
    pub fn months_until(&self, other: &YearMonth) -> i64 {
        (i64::from(other.year) - i64::from(self.year)) * 12
            + (i64::from(other.month0) - i64::from(self.month0))
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month())
    }
}

/// Parses `"YYYY"` (January implied) or `"YYYY-MM"`.
impl FromStr for YearMonth {
    type Err = DurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DurationError::InvalidFormat(s.to_string());
        let trimmed = s.trim();

        let (year_part, month_part) = match trimmed.split_once(SEPARATOR) {
            Some((year, month)) => (year, Some(month)),
            None => (trimmed, None),
        };

        let year: i32 = parse_digits(year_part).ok_or_else(invalid)?;
        let month: u32 = match month_part {
            Some(month) => parse_digits(month).ok_or_else(invalid)?,
            None => 1,
        };

        YearMonth::new(year, month).ok_or_else(invalid)
    }
}

/// Digits only: rejects signs, whitespace and a second separator, which
/// `str::parse` alone would let through or misreport.
fn parse_digits<T: FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// End of a date range: a fixed month, or an ongoing range resolved at
/// evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndSpec {
    Date(YearMonth),
    Ongoing,
}

impl EndSpec {
    const SENTINELS: [&'static str; 2] = ["present", "current"];

    /// Resolve against the evaluation date. Only `Ongoing` reads `today`.
    pub fn resolve(self, today: NaiveDate) -> YearMonth {
        match self {
            EndSpec::Date(ym) => ym,
            EndSpec::Ongoing => YearMonth::from_date(today),
        }
    }
}

impl FromStr for EndSpec {
    type Err = DurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if Self::SENTINELS
            .iter()
            .any(|token| trimmed.eq_ignore_ascii_case(token))
        {
            return Ok(EndSpec::Ongoing);
        }
        s.parse().map(EndSpec::Date)
    }
}
