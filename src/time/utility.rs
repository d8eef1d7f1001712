use chrono::{NaiveDate, Weekday};

use crate::error::CalendarError;

#[inline]
pub const fn is_leap (year: i32) -> bool {
    ((year % 4 == 0) && (year % 100!= 0)) || (year % 400 == 0)
}


pub const fn days_of_month (year: i32, month: u32) -> Option<u32> {
    const NO_LEAP_EOM: [u32; 13] = [
        0, 31, 28, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    const LEAP_EOM: [u32; 13] = [
        0, 31, 29, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    if month < 1 || month > 12 {
        None
    } else if is_leap(year) {
        Some(LEAP_EOM[month as usize])
    } else {
        Some(NO_LEAP_EOM[month as usize])
    }
}

pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, days_of_month(year, month)?)
}

/// Days forward from `from` to the next `to` (0 when equal), Monday = 0.
#[inline]
pub fn days_until_weekday(from: Weekday, to: Weekday) -> u64 {
    ((to.num_days_from_monday() + 7 - from.num_days_from_monday()) % 7) as u64
}

/// A year is usable when it is not before year 1 and its whole span fits in `NaiveDate`.
pub fn validate_year(year: i32) -> Result<(), CalendarError> {
    let representable = year >= 1
        && NaiveDate::from_ymd_opt(year, 1, 1).is_some()
        && NaiveDate::from_ymd_opt(year, 12, 31).is_some();
    if representable {
        Ok(())
    } else {
        Err(CalendarError::InvalidYear(year))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;

    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_leap(2024));
        assert!(is_leap(2000));
        assert!(!is_leap(1900));
        assert!(!is_leap(2021));
    }

    #[test]
    fn month_ends() {
        assert_eq!(days_of_month(2024, 2), Some(29));
        assert_eq!(days_of_month(2023, 2), Some(28));
        assert_eq!(days_of_month(2021, 13), None);
        assert_eq!(days_of_month(2021, 0), None);
        assert_eq!(last_day_of_month(2021, 5), NaiveDate::from_ymd_opt(2021, 5, 31));
        assert_eq!(last_day_of_month(2021, 13), None);
    }

    #[test]
    fn weekday_distance_is_forward() {
        assert_eq!(days_until_weekday(Weekday::Mon, Weekday::Mon), 0);
        assert_eq!(days_until_weekday(Weekday::Fri, Weekday::Mon), 3);
        assert_eq!(days_until_weekday(Weekday::Mon, Weekday::Sun), 6);
    }

    #[test]
    fn year_validation() {
        assert!(validate_year(1).is_ok());
        assert!(validate_year(2021).is_ok());
        assert_eq!(validate_year(0), Err(CalendarError::InvalidYear(0)));
        assert_eq!(validate_year(-5), Err(CalendarError::InvalidYear(-5)));
        assert_eq!(validate_year(i32::MAX), Err(CalendarError::InvalidYear(i32::MAX)));
        let max_year = NaiveDate::MAX.year();
        assert!(validate_year(max_year).is_ok());
        assert!(validate_year(max_year + 1).is_err());
    }
}
