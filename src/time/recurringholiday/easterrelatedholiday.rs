use std::collections::HashSet;

use chrono::{Days, NaiveDate};

use super::recurringholiday::RecurringHoliday;

/// Western (Gregorian) Easter Sunday, anonymous Gregorian algorithm
/// (Meeus/Jones/Butcher). All operands are non-negative for `year >= 1`.
pub fn western_easter_sunday(year: i32) -> Option<NaiveDate> {
    if year < 1 {
        return None;
    }

    let y = year as i64;
    let a = y % 19;
    let b = y / 100;
    let c = y % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = ((h + l - 7 * m + 114) % 31) + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

/// A holiday a fixed number of days away from Western Easter Sunday.
/// Good Friday is `shift_days = -2`.
#[derive(Clone, Debug)]
pub struct EasterRelatedHoliday {
    shift_days: i32
}

impl EasterRelatedHoliday {
    pub fn new(shift_days: i32) -> EasterRelatedHoliday {
        EasterRelatedHoliday { shift_days }
    }

    pub fn good_friday() -> EasterRelatedHoliday {
        EasterRelatedHoliday::new(-2)
    }

    pub fn shift_days(&self) -> i32 {
        self.shift_days
    }
}

impl RecurringHoliday for EasterRelatedHoliday {
    fn get_holiday(&self, year: i32) -> HashSet<NaiveDate> {
        let mut holiday_set = HashSet::new();

        let shifted = western_easter_sunday(year).and_then(|easter_day| {
            let offset = Days::new(self.shift_days.unsigned_abs() as u64);
            if self.shift_days >= 0 {
                easter_day.checked_add_days(offset)
            } else {
                easter_day.checked_sub_days(offset)
            }
        });

        if let Some(d) = shifted {
            holiday_set.insert(d);
        }

        holiday_set
    }
}
