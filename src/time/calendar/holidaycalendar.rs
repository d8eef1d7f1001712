use std::collections::{BTreeSet, HashSet};

use chrono::{Datelike, Days, NaiveDate};

use crate::error::CalendarError;
use crate::time::utility::last_day_of_month;

const ONE_DAY: Days = Days::new(1);

/// A calendar of non-business days. `Send + Sync` so calendars can sit behind `Arc`.
pub trait HolidayCalendar: Send + Sync {
    fn is_holiday(&self, d: NaiveDate) -> bool;

    /// Every non-business day of `year`, weekends included.
    fn get_holiday_set(&self, year: i32) -> Result<HashSet<NaiveDate>, CalendarError>;

    /// Closures of `year` from holiday rules and one-off holidays, whether or
    /// not they fall on a weekend. Plain weekends are not included.
    fn get_recurring_holiday_set(&self, year: i32) -> Result<HashSet<NaiveDate>, CalendarError>;

    fn is_business_day(&self, d: NaiveDate) -> bool {
        !self.is_holiday(d)
    }

    /// Moves `n` business days away from `horizon`. `None` when the walk
    /// leaves the range of `NaiveDate`.
    fn shift_n_business_day(&self, horizon: NaiveDate, n: i32) -> Option<NaiveDate> {
        let shif_one_day = if n >= 0 {
            |d: NaiveDate| d.checked_add_days(ONE_DAY)
        } else {
            |d: NaiveDate| d.checked_sub_days(ONE_DAY)
        };

        let mut m = n.unsigned_abs();
        let mut d = horizon;
        while m > 0 {
            d = shif_one_day(d)?;
            m -= self.is_business_day(d) as u32;
        }
        Some(d)
    }

    fn next_business_day(&self, d: NaiveDate) -> Option<NaiveDate> {
        self.shift_n_business_day(d, 1)
    }

    fn previous_business_day(&self, d: NaiveDate) -> Option<NaiveDate> {
        self.shift_n_business_day(d, -1)
    }

    fn last_business_day_of_month(&self, year: i32, month: u32) -> Option<NaiveDate> {
        let mut eom = last_day_of_month(year, month)?;
        while self.is_holiday(eom) {
            eom = eom.checked_sub_days(ONE_DAY).filter(|d| d.month() == month)?;
        }
        Some(eom)
    }

    fn first_business_day_of_month(&self, year: i32, month: u32) -> Option<NaiveDate> {
        let mut fom = NaiveDate::from_ymd_opt(year, month, 1)?;
        while self.is_holiday(fom) {
            fom = fom.checked_add_days(ONE_DAY).filter(|d| d.month() == month)?;
        }
        Some(fom)
    }

    /// Business days in `[start, end]`, both ends inclusive. Reversed bounds are swapped.
    fn business_days_between(&self, start: NaiveDate, end: NaiveDate) -> BTreeSet<NaiveDate> {
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        start
            .iter_days()
            .take_while(|d| *d <= end)
            .filter(|d| self.is_business_day(*d))
            .collect()
    }

    /// Whether `d2` is the first business day strictly after `d1`.
    fn is_next_business_day(&self, d1: NaiveDate, d2: NaiveDate) -> bool {
        d2 > d1 && self.is_business_day(d2) && self.next_business_day(d1) == Some(d2)
    }
}
