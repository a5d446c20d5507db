//! Elapsed-time calculation for dated résumé entries.
//!
//! Converts a `(start, end)` pair of date strings into whole years and months,
//! counting both the start and the end month. `"present"` / `"current"` as the
//! end resolve to the evaluation date, which makes [`compute_duration`] depend
//! on the clock; [`compute_duration_at`] takes that date explicitly.

mod date_spec;

pub use date_spec::{EndSpec, YearMonth};

use std::fmt;

use chrono::{Local, NaiveDate};

use crate::error::DurationError;

/// Whole years and months between two calendar points.
/// Never zero: the smallest duration is one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration {
    years: u32,
    months: u32,
}

impl Duration {
    /// Split an inclusive month count into years and months. Counts below 1 clamp to 1.
    pub fn from_total_months(total: i64) -> Self {
        let total = u32::try_from(total.max(1)).unwrap_or(u32::MAX);
        Self {
            years: total / 12,
            months: total % 12,
        }
    }

    /// Inclusive month count between `start` and `end`.
    pub fn between(start: YearMonth, end: YearMonth) -> Self {
        Self::from_total_months(start.months_until(&end) + 1)
    }

    pub fn years(&self) -> u32 {
        self.years
    }

    pub fn months(&self) -> u32 {
        self.months
    }

    pub fn total_months(&self) -> u32 {
        self.years * 12 + self.months
    }
}

/// "N year(s)", "N month(s)", or "Y year(s) and M month(s)".
impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.years, self.months) {
            (0, months) => write_unit(f, months, "month"),
            (years, 0) => write_unit(f, years, "year"),
            (years, months) => {
                write_unit(f, years, "year")?;
                f.write_str(" and ")?;
                write_unit(f, months, "month")
            }
        }
    }
}

fn write_unit(f: &mut fmt::Formatter<'_>, count: u32, unit: &str) -> fmt::Result {
    if count == 1 {
        write!(f, "1 {}", unit)
    } else {
        write!(f, "{} {}s", count, unit)
    }
}

/// Duration between `start` and `end`, with ongoing ranges resolved to the
/// local date at the time of the call.
pub fn compute_duration(start: &str, end: &str) -> Result<Duration, DurationError> {
    compute_duration_at(start, end, Local::now().date_naive())
}

/// Duration between `start` and `end` as of `today`.
///
/// # Errors
/// * `InvalidFormat` - either side is not `YYYY` / `YYYY-MM` (or a sentinel, for `end`)
/// * `InvalidRange` - the resolved end month is earlier than the start month
pub fn compute_duration_at(
    start: &str,
    end: &str,
    today: NaiveDate,
) -> Result<Duration, DurationError> {
    let start_point: YearMonth = start.parse()?;
    let end_point = end.parse::<EndSpec>()?.resolve(today);

    if end_point < start_point {
        return Err(DurationError::InvalidRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    Ok(Duration::between(start_point, end_point))
}

/// Display text for an entry's date range, or None when it should be omitted.
/// Missing fields are skipped silently; unparseable ranges are logged.
pub fn annotate(start: Option<&str>, end: Option<&str>, today: NaiveDate) -> Option<String> {
    let (start, end) = (start?, end?);
    if start.trim().is_empty() || end.trim().is_empty() {
        return None;
    }
    match compute_duration_at(start, end, today) {
        Ok(duration) => Some(duration.to_string()),
        Err(error) => {
            tracing::warn!(start, end, %error, "omitting duration");
            None
        }
    }
}

/// Caption combining the visible date text with its duration.
pub fn accessible_label(display_date: &str, duration: &str) -> String {
    format!("{}, duration: {}", display_date.trim(), duration)
}
