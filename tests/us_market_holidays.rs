//! Invariants of the US market holiday rules across many years.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};
use proptest::prelude::*;

use mktcal::time::calendar::holidaycalendar::HolidayCalendar;
use mktcal::{easter_sunday, holidays_for_year, CalendarError, UsMarketCalendar};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn in_month(holidays: &HashSet<NaiveDate>, month: u32, weekday: Weekday) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = holidays
        .iter()
        .filter(|d| d.month() == month && d.weekday() == weekday)
        .copied()
        .collect();
    dates.sort();
    dates
}

#[test]
fn no_two_holidays_coincide_1900_to_2100() {
    for year in 1900..=2100 {
        let expected = if year >= 2021 { 11 } else { 10 };
        assert_eq!(holidays_for_year(year).unwrap().len(), expected, "year {}", year);
    }
}

#[test]
fn known_years() {
    let h2024 = holidays_for_year(2024).unwrap();
    for d in [
        ymd(2024, 1, 1),
        ymd(2024, 1, 15),
        ymd(2024, 2, 19),
        ymd(2024, 3, 29),
        ymd(2024, 5, 27),
        ymd(2024, 6, 19),
        ymd(2024, 7, 4),
        ymd(2024, 9, 2),
        ymd(2024, 11, 28),
        ymd(2024, 11, 29),
        ymd(2024, 12, 25),
    ] {
        assert!(h2024.contains(&d), "{}", d);
    }

    let h2020 = holidays_for_year(2020).unwrap();
    assert!(h2020.contains(&ymd(2020, 4, 10)));
    assert!(!h2020.contains(&ymd(2020, 6, 19)));
}

#[test]
fn good_friday_two_days_before_easter() {
    for year in 1900..=2100 {
        let easter = easter_sunday(year).unwrap();
        let good_friday = easter - chrono::Days::new(2);
        assert_eq!(good_friday.weekday(), Weekday::Fri);
        assert!(holidays_for_year(year).unwrap().contains(&good_friday), "year {}", year);
    }
}

#[test]
fn out_of_range_years_fail() {
    assert_eq!(holidays_for_year(0), Err(CalendarError::InvalidYear(0)));
    assert_eq!(holidays_for_year(i32::MIN), Err(CalendarError::InvalidYear(i32::MIN)));
    let last_year = NaiveDate::MAX.year();
    assert_eq!(holidays_for_year(last_year + 1), Err(CalendarError::InvalidYear(last_year + 1)));
}

#[test]
fn last_representable_year_has_every_holiday() {
    let last_year = NaiveDate::MAX.year();
    let holidays = holidays_for_year(last_year).unwrap();
    assert_eq!(holidays.len(), 11);
    assert!(holidays.contains(&ymd(last_year, 12, 25)));

    let calendar = UsMarketCalendar::new().unwrap();
    let all = calendar.get_holiday_set(last_year).unwrap();
    assert!(all.is_superset(&holidays));
    assert!(all.iter().all(|d| d.year() == last_year));
    assert_eq!(calendar.next_business_day(NaiveDate::MAX), None);
    let previous = calendar.previous_business_day(NaiveDate::MAX).unwrap();
    assert!(calendar.is_business_day(previous));
    assert!(!all.contains(&previous));
}

#[test]
fn trading_days_around_thanksgiving() {
    let calendar = UsMarketCalendar::new().unwrap();
    let days: Vec<NaiveDate> = calendar
        .business_days_between(ymd(2021, 11, 30), ymd(2021, 11, 22))
        .into_iter()
        .collect();
    assert_eq!(days, vec![
        ymd(2021, 11, 22),
        ymd(2021, 11, 23),
        ymd(2021, 11, 24),
        ymd(2021, 11, 29),
        ymd(2021, 11, 30),
    ]);
    assert!(calendar.is_next_business_day(ymd(2021, 11, 24), ymd(2021, 11, 29)));
    assert!(!calendar.is_next_business_day(ymd(2021, 11, 24), ymd(2021, 11, 30)));
    assert!(!calendar.is_next_business_day(ymd(2021, 11, 24), ymd(2021, 11, 26)));
    assert!(!calendar.is_next_business_day(ymd(2021, 11, 29), ymd(2021, 11, 24)));
}

proptest! {
    #[test]
    fn holiday_sets_are_deterministic(year in 1583i32..3000) {
        prop_assert_eq!(holidays_for_year(year).unwrap(), holidays_for_year(year).unwrap());
    }

    #[test]
    fn floating_holidays_land_on_their_weekday(year in 1583i32..3000) {
        let holidays = holidays_for_year(year).unwrap();

        // New Year's Day may itself be a Monday
        let mlk: Vec<NaiveDate> = in_month(&holidays, 1, Weekday::Mon)
            .into_iter()
            .filter(|d| d.day() != 1)
            .collect();
        prop_assert_eq!(mlk.len(), 1);
        prop_assert!((15..=21).contains(&mlk[0].day()));

        let presidents = in_month(&holidays, 2, Weekday::Mon);
        prop_assert_eq!(presidents.len(), 1);
        prop_assert!((15..=21).contains(&presidents[0].day()));

        let memorial = in_month(&holidays, 5, Weekday::Mon);
        prop_assert_eq!(memorial.len(), 1);
        prop_assert!(memorial[0].day() >= 25);

        let labor = in_month(&holidays, 9, Weekday::Mon);
        prop_assert_eq!(labor.len(), 1);
        prop_assert!(labor[0].day() <= 7);

        let thanksgiving = in_month(&holidays, 11, Weekday::Thu);
        prop_assert_eq!(thanksgiving.len(), 1);
        prop_assert!((22..=28).contains(&thanksgiving[0].day()));

        let black_friday = thanksgiving[0].succ_opt().unwrap();
        prop_assert_eq!(black_friday.weekday(), Weekday::Fri);
        prop_assert!(holidays.contains(&black_friday));
    }

    #[test]
    fn every_holiday_is_in_its_year(year in 1i32..5000) {
        let holidays = holidays_for_year(year).unwrap();
        prop_assert!(holidays.iter().all(|d| d.year() == year));
        prop_assert!(holidays.contains(&ymd(year, 1, 1)));
        prop_assert!(holidays.contains(&ymd(year, 12, 25)));
    }
}
