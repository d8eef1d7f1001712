use std::collections::HashSet;
use std::sync::Arc;

use chrono::{Datelike, Days, NaiveDate};

use super::recurringholiday::RecurringHoliday;
use crate::error::CalendarError;

/// Larger shifts could land a base date from two years away in the target year.
pub const MAX_SHIFT_DAYS: i32 = 365;

/// Another rule's dates moved by a fixed number of calendar days,
/// e.g. the day after Thanksgiving.
#[derive(Clone)]
pub struct ShiftedHoliday {
    base: Arc<dyn RecurringHoliday>,
    shift_days: i32
}

impl ShiftedHoliday {
    pub fn new(base: Arc<dyn RecurringHoliday>, shift_days: i32) -> Result<ShiftedHoliday, CalendarError> {
        if shift_days.unsigned_abs() > MAX_SHIFT_DAYS as u32 {
            return Err(CalendarError::InvalidRule(format!(
                "shift of {} days is outside +/-{}",
                shift_days, MAX_SHIFT_DAYS
            )));
        }
        Ok(ShiftedHoliday { base, shift_days })
    }

    pub fn day_after(base: Arc<dyn RecurringHoliday>) -> ShiftedHoliday {
        ShiftedHoliday { base, shift_days: 1 }
    }

    pub fn shift_days(&self) -> i32 {
        self.shift_days
    }

    fn shift(&self, d: NaiveDate) -> Option<NaiveDate> {
        let offset = Days::new(self.shift_days.unsigned_abs() as u64);
        if self.shift_days >= 0 {
            d.checked_add_days(offset)
        } else {
            d.checked_sub_days(offset)
        }
    }
}

impl RecurringHoliday for ShiftedHoliday {
    /// Dates of `year` only; a shift across a year boundary lands in the other year's set.
    fn get_holiday(&self, year: i32) -> HashSet<NaiveDate> {
        let mut holiday_set = HashSet::new();
        for y in [year.saturating_sub(1), year, year.saturating_add(1)] {
            holiday_set.extend(
                self.base
                    .get_holiday(y)
                    .into_iter()
                    .filter_map(|d| self.shift(d))
                    .filter(|d| d.year() == year)
            );
        }
        holiday_set
    }
}
