use std::collections::HashSet;

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::error::CalendarError;
use crate::time::utility::{days_until_weekday, last_day_of_month};
use super::recurringholiday::RecurringHoliday;

#[derive(Clone, Debug)]
pub struct LastWeekdayHoliday {
    month: u32,
    weekday: Weekday,
}

impl LastWeekdayHoliday {
    pub fn new(month: u32, weekday: Weekday) -> Result<LastWeekdayHoliday, CalendarError> {
        if !(1..=12).contains(&month) {
            Err(CalendarError::InvalidRule(format!("last {} in month {}", weekday, month)))
        } else {
            Ok(LastWeekdayHoliday { month, weekday })
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl RecurringHoliday for LastWeekdayHoliday {
    fn get_holiday(&self, year: i32) -> HashSet<NaiveDate> {
        let mut holiday_set = HashSet::new();

        // Step back from the month end: (end weekday - target weekday) mod 7 days
        let holiday = last_day_of_month(year, self.month).and_then(|eom| {
            let days_back = days_until_weekday(self.weekday, eom.weekday());
            eom.checked_sub_days(Days::new(days_back))
        });

        if let Some(d) = holiday {
            holiday_set.insert(d);
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
    fn last_monday_of_may() {
        let memorial = LastWeekdayHoliday::new(5, Weekday::Mon).unwrap();
        assert_eq!(memorial.get_holiday(2021), HashSet::from([ymd(2021, 5, 31)]));
        assert_eq!(memorial.get_holiday(2022), HashSet::from([ymd(2022, 5, 30)]));
        assert_eq!(memorial.get_holiday(2024), HashSet::from([ymd(2024, 5, 27)]));
    }

    #[test]
    fn december_does_not_spill_into_next_year() {
        // 2023-12-31 is a Sunday
        let last_sunday = LastWeekdayHoliday::new(12, Weekday::Sun).unwrap();
        assert_eq!(last_sunday.get_holiday(2023), HashSet::from([ymd(2023, 12, 31)]));
        let last_friday = LastWeekdayHoliday::new(12, Weekday::Fri).unwrap();
        assert_eq!(last_friday.get_holiday(2023), HashSet::from([ymd(2023, 12, 29)]));
    }

    #[test]
    fn rejects_bad_month() {
        assert!(LastWeekdayHoliday::new(13, Weekday::Mon).is_err());
    }
}
