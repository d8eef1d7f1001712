use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::time::calendar::holidaycalendar::HolidayCalendar;

/// A run of consecutive trading days with no stored data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DateGap {
    pub symbol: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub missing_days: usize
}

impl fmt::Display for DateGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} to {} ({} days)", self.symbol, self.start_date, self.end_date, self.missing_days)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GapAnalysis {
    pub symbol: String,
    pub total_expected_days: usize,
    pub existing_days: usize,
    pub missing_days: usize,
    pub gaps: Vec<DateGap>,
    pub coverage_percentage: f64
}

impl GapAnalysis {
    pub fn is_complete(&self) -> bool {
        self.missing_days == 0
    }
}

impl fmt::Display for GapAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}/{} days ({:.1}% coverage, {} gaps)",
               self.symbol,
               self.existing_days,
               self.total_expected_days,
               self.coverage_percentage,
               self.gaps.len())
    }
}

/// Compares stored dates against the calendar's trading days in `[start, end]`.
///
/// Stored dates that are not expected trading days are ignored. Missing days
/// adjacent in trading-day terms (no expected day between them) form one gap,
/// so a weekend or holiday does not split a gap.
pub fn analyze_gaps(
    symbol: &str,
    existing: &HashSet<NaiveDate>,
    calendar: &dyn HolidayCalendar,
    start: NaiveDate,
    end: NaiveDate
) -> GapAnalysis {
    let expected = calendar.business_days_between(start, end);

    let mut gaps: Vec<DateGap> = Vec::new();
    let mut current: Option<DateGap> = None;
    let mut existing_days = 0usize;

    for &d in expected.iter() {
        if existing.contains(&d) {
            existing_days += 1;
            if let Some(gap) = current.take() {
                gaps.push(gap);
            }
            continue;
        }

        match current.as_mut() {
            Some(gap) => {
                gap.end_date = d;
                gap.missing_days += 1;
            },
            None => {
                current = Some(DateGap {
                    symbol: symbol.to_owned(),
                    start_date: d,
                    end_date: d,
                    missing_days: 1
                });
            }
        }
    }
    if let Some(gap) = current {
        gaps.push(gap);
    }

    let total_expected_days = expected.len();
    let missing_days = total_expected_days - existing_days;
    let coverage_percentage = if total_expected_days == 0 {
        100.0
    } else {
        existing_days as f64 / total_expected_days as f64 * 100.0
    };

    log::debug!("{} gap analysis: {} missing of {} in {} gap(s)", symbol, missing_days, total_expected_days, gaps.len());

    GapAnalysis {
        symbol: symbol.to_owned(),
        total_expected_days,
        existing_days,
        missing_days,
        gaps,
        coverage_percentage
    }
}
