use std::collections::HashSet;

use chrono::NaiveDate;

use crate::error::CalendarError;
use super::recurringholiday::RecurringHoliday;

/// A holiday on the same month and day every year, unadjusted for weekends.
///
/// `effective_from` gates holidays introduced in a given year (e.g. Juneteenth
/// from 2021); earlier years produce no date.
#[derive(Clone, Debug)]
pub struct FixedDateHoliday {
    month: u32,
    day: u32,
    effective_from: Option<i32>
}

impl FixedDateHoliday {
    pub fn new(month: u32, day: u32) -> Result<FixedDateHoliday, CalendarError> {
        // 2000 is a leap year, so Feb 29 is accepted here
        if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
            return Err(CalendarError::InvalidRule(
                format!("no such fixed date: month {}, day {}", month, day)));
        }
        Ok(FixedDateHoliday { month, day, effective_from: None })
    }

    pub fn effective_from(self, year: i32) -> FixedDateHoliday {
        FixedDateHoliday { effective_from: Some(year), ..self }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn first_year(&self) -> Option<i32> {
        self.effective_from
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn get_holiday(&self, year: i32) -> HashSet<NaiveDate> {
        let mut holiday_set = HashSet::new();

        if self.effective_from.is_some_and(|first| year < first) {
            return holiday_set;
        }

        if let Some(d) = NaiveDate::from_ymd_opt(year, self.month, self.day) {
            holiday_set.insert(d);
        }

        holiday_set
    }
}
