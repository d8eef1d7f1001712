use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};


/// A holiday rule that produces its dates for any given year.
///
/// Rules never fail: a year the rule cannot be evaluated for yields an
/// empty set. Year validation happens at the calendar level.
pub trait RecurringHoliday: Send + Sync {

    fn get_holiday(&self, year: i32) -> HashSet<NaiveDate>;

    fn is_holiday(&self, d: &NaiveDate) -> bool {
        let holiday_set = self.get_holiday(d.year());
        holiday_set.contains(d)
    }
}
