use std::collections::HashSet;

use chrono::{
    Datelike,
    Days,
    NaiveDate,
    Weekday
};

use crate::error::CalendarError;
use crate::time::utility::days_until_weekday;
use super::recurringholiday::RecurringHoliday;

/// The n-th occurrence of a weekday within a month, e.g. "3rd Monday in January".
#[derive(Clone, Debug)]
pub struct NthWeekdayHoliday {
    month: u32,
    n: u8,
    weekday: Weekday,
}

impl NthWeekdayHoliday {
    pub fn new(month: u32, n: u8, weekday: Weekday) -> Result<NthWeekdayHoliday, CalendarError> {
        if !(1..=12).contains(&month) || !(1..=5).contains(&n) {
            Err(CalendarError::InvalidRule(
                format!("occurrence {} of {} in month {}", n, weekday, month)))
        } else {
            Ok(NthWeekdayHoliday { month, n, weekday })
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn n(&self) -> u8 {
        self.n
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// First occurrence on or after the 1st, then `(n - 1)` whole weeks.
    fn get_holiday_impl(&self, year: i32) -> Option<NaiveDate> {
        let first_of_month = NaiveDate::from_ymd_opt(year, self.month, 1)?;
        let first_occurrence = first_of_month
            .checked_add_days(Days::new(days_until_weekday(first_of_month.weekday(), self.weekday)))?;
        let nth = first_occurrence.checked_add_days(Days::new(7 * (self.n as u64 - 1)))?;
        if nth.month() == self.month {
            Some(nth)
        } else {
            None
        }
    }
}

impl RecurringHoliday for NthWeekdayHoliday {
    fn get_holiday(&self, year: i32) -> HashSet<NaiveDate> {
        let mut holiday_set = HashSet::new();

        if let Some(date) = self.get_holiday_impl(year) {
            holiday_set.insert(date);
        }

        holiday_set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn third_monday_of_january() {
        let mlk = NthWeekdayHoliday::new(1, 3, Weekday::Mon).unwrap();
        assert_eq!(mlk.get_holiday(2021), HashSet::from([ymd(2021, 1, 18)]));
        assert_eq!(mlk.get_holiday(2024), HashSet::from([ymd(2024, 1, 15)]));
    }

    #[test]
    fn first_day_is_target_weekday() {
        // 2024-01-01 is a Monday
        let first_monday = NthWeekdayHoliday::new(1, 1, Weekday::Mon).unwrap();
        assert_eq!(first_monday.get_holiday(2024), HashSet::from([ymd(2024, 1, 1)]));
    }

    #[test]
    fn fourth_thursday_of_november() {
        let thanksgiving = NthWeekdayHoliday::new(11, 4, Weekday::Thu).unwrap();
        assert_eq!(thanksgiving.get_holiday(2021), HashSet::from([ymd(2021, 11, 25)]));
        assert_eq!(thanksgiving.get_holiday(2023), HashSet::from([ymd(2023, 11, 23)]));
    }

    #[test]
    fn fifth_occurrence_may_not_exist() {
        // February 2021 has only four Mondays
        let fifth_monday = NthWeekdayHoliday::new(2, 5, Weekday::Mon).unwrap();
        assert!(fifth_monday.get_holiday(2021).is_empty());
    }

    #[test]
    fn rejects_bad_rules() {
        assert!(NthWeekdayHoliday::new(0, 1, Weekday::Mon).is_err());
        assert!(NthWeekdayHoliday::new(1, 0, Weekday::Mon).is_err());
        assert!(NthWeekdayHoliday::new(1, 6, Weekday::Mon).is_err());
    }
}
