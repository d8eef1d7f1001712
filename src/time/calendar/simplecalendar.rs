use std::collections::HashSet;
use std::sync::Arc;

use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};

use crate::error::CalendarError;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use crate::time::utility::{days_until_weekday, validate_year};

/// Weekend days as a bitmask, Mon(0) .. Sun(6).
#[derive(Clone, Copy)]
struct WeekendMask(u8);

impl WeekendMask {
    fn new(weekends: &HashSet<Weekday>) -> Self {
        let mut mask = 0u8;
        for &weekday in weekends {
            mask |= 1u8 << weekday.num_days_from_monday();
        }
        WeekendMask(mask)
    }

    #[inline]
    fn is_full_week(&self) -> bool {
        self.0 == 0b0111_1111
    }

    #[inline]
    fn is_weekend(&self, weekday: Weekday) -> bool {
        let bit = 1u8 << weekday.num_days_from_monday();
        (self.0 & bit) != 0
    }

    fn weekend_list(&self) -> Vec<Weekday> {
        (0..7u8)
            .filter(|day| (self.0 & (1u8 << day)) != 0)
            .filter_map(|day| Weekday::try_from(day).ok())
            .collect()
    }
}

pub struct SimpleCalendar {
    weekends: WeekendMask,
    recurring_holidays: Vec<Arc<dyn RecurringHoliday>>,
    additional_holidays: HashSet<NaiveDate>,
    additional_business_days: HashSet<NaiveDate>
}

impl SimpleCalendar {
    /// # Arguments
    /// * `weekends` - weekdays that are never business days
    /// * `recurring_holidays` - holiday rules evaluated per year
    /// * `additional_holidays` - one-off closures
    /// * `additional_business_days` - days that are open regardless of weekends or holidays
    ///
    /// Fails when every weekday is a weekend, since such a calendar has no business days.
    pub fn new(
        weekends: HashSet<Weekday>,
        recurring_holidays: Vec<Arc<dyn RecurringHoliday>>,
        additional_holidays: Vec<NaiveDate>,
        additional_business_days: Vec<NaiveDate>
    ) -> Result<SimpleCalendar, CalendarError> {
        let weekends = WeekendMask::new(&weekends);
        if weekends.is_full_week() {
            return Err(CalendarError::InvalidRule("all seven weekdays are weekends".to_owned()));
        }
        Ok(SimpleCalendar {
            weekends,
            recurring_holidays,
            additional_holidays: additional_holidays.into_iter().collect(),
            additional_business_days: additional_business_days.into_iter().collect()
        })
    }

    #[inline]
    pub fn is_weekend(&self, d: NaiveDate) -> bool {
        self.weekends.is_weekend(d.weekday())
    }

    pub fn is_recurring_holiday(&self, d: NaiveDate) -> bool {
        self.recurring_holidays.iter().any(|r| r.is_holiday(&d))
    }

    #[inline]
    pub fn is_additional_holiday(&self, d: NaiveDate) -> bool {
        self.additional_holidays.contains(&d)
    }

    #[inline]
    pub fn is_additional_business_day(&self, d: NaiveDate) -> bool {
        self.additional_business_days.contains(&d)
    }

    pub fn weekends(&self) -> HashSet<Weekday> {
        self.weekends.weekend_list().into_iter().collect()
    }
}

impl HolidayCalendar for SimpleCalendar {
    fn is_holiday(&self, d: NaiveDate) -> bool {
        if self.is_additional_business_day(d) {
            return false;
        }
        self.is_weekend(d) || self.is_additional_holiday(d) || self.is_recurring_holiday(d)
    }

    /// Additional business days are removed, like in [`HolidayCalendar::get_holiday_set`].
    fn get_recurring_holiday_set(&self, year: i32) -> Result<HashSet<NaiveDate>, CalendarError> {
        validate_year(year)?;
        let mut holiday_set = HashSet::new();
        for r in self.recurring_holidays.iter() {
            holiday_set.extend(r.get_holiday(year));
        }
        holiday_set.extend(
            self.additional_holidays
                .iter()
                .filter(|d| d.year() == year)
                .copied()
        );
        for b_day in self.additional_business_days.iter().filter(|d| d.year() == year) {
            holiday_set.remove(b_day);
        }
        Ok(holiday_set)
    }

    /// Weekends are collected by stepping a week at a time from the first
    /// occurrence of each weekend day, then recurring and additional holidays
    /// are added and additional business days removed.
    fn get_holiday_set(&self, year: i32) -> Result<HashSet<NaiveDate>, CalendarError> {
        let mut holiday_set = self.get_recurring_holiday_set(year)?;
        let jan_1 = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(CalendarError::InvalidYear(year))?;

        for target_weekday in self.weekends.weekend_list() {
            let offset = days_until_weekday(jan_1.weekday(), target_weekday) as usize;
            holiday_set.extend(
                jan_1
                    .iter_days()
                    .skip(offset)
                    .step_by(7)
                    .take_while(|d| d.year() == year)
            );
        }

        for b_day in self.additional_business_days.iter().filter(|d| d.year() == year) {
            holiday_set.remove(b_day);
        }

        Ok(holiday_set)
    }
}
