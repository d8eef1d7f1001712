use std::collections::HashSet;
use std::sync::Arc;

use chrono::{NaiveDate, Weekday};

use crate::error::CalendarError;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::simplecalendar::SimpleCalendar;
use crate::time::recurringholiday::easterrelatedholiday::{western_easter_sunday, EasterRelatedHoliday};
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::lastweekdayholiday::LastWeekdayHoliday;
use crate::time::recurringholiday::nthweekdayholiday::NthWeekdayHoliday;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use crate::time::recurringholiday::shiftedholiday::ShiftedHoliday;
use crate::time::utility::validate_year;

pub const JUNETEENTH_FIRST_YEAR: i32 = 2021;

/// The US stock market closure rules. Fixed dates are not moved off weekends.
pub fn us_market_rules() -> Result<Vec<Arc<dyn RecurringHoliday>>, CalendarError> {
    let thanksgiving: Arc<dyn RecurringHoliday> = Arc::new(NthWeekdayHoliday::new(11, 4, Weekday::Thu)?);
    Ok(vec![
        // New Year's Day
        Arc::new(FixedDateHoliday::new(1, 1)?),
        // Martin Luther King Jr. Day
        Arc::new(NthWeekdayHoliday::new(1, 3, Weekday::Mon)?),
        // Presidents' Day
        Arc::new(NthWeekdayHoliday::new(2, 3, Weekday::Mon)?),
        Arc::new(EasterRelatedHoliday::good_friday()),
        // Memorial Day
        Arc::new(LastWeekdayHoliday::new(5, Weekday::Mon)?),
        // Juneteenth
        Arc::new(FixedDateHoliday::new(6, 19)?.effective_from(JUNETEENTH_FIRST_YEAR)),
        // Independence Day
        Arc::new(FixedDateHoliday::new(7, 4)?),
        // Labor Day
        Arc::new(NthWeekdayHoliday::new(9, 1, Weekday::Mon)?),
        thanksgiving.clone(),
        // Black Friday
        Arc::new(ShiftedHoliday::day_after(thanksgiving)),
        // Christmas Day
        Arc::new(FixedDateHoliday::new(12, 25)?),
    ])
}

/// Every date the US stock market is closed in `year`, weekends excluded.
///
/// The result is a set: coinciding holidays appear once. Sort at the
/// presentation boundary if an order is needed.
pub fn holidays_for_year(year: i32) -> Result<HashSet<NaiveDate>, CalendarError> {
    validate_year(year)?;
    let mut holiday_set = HashSet::with_capacity(11);
    for rule in us_market_rules()? {
        holiday_set.extend(rule.get_holiday(year));
    }
    log::debug!("{} US market holidays in {}", holiday_set.len(), year);
    Ok(holiday_set)
}

pub fn easter_sunday(year: i32) -> Result<NaiveDate, CalendarError> {
    validate_year(year)?;
    western_easter_sunday(year).ok_or(CalendarError::InvalidYear(year))
}

/// Business-day calendar for the US stock market: Saturday/Sunday weekends
/// plus the closures of [`holidays_for_year`].
pub struct UsMarketCalendar {
    calendar: SimpleCalendar
}

impl UsMarketCalendar {
    pub fn new() -> Result<UsMarketCalendar, CalendarError> {
        UsMarketCalendar::with_overrides(Vec::new(), Vec::new())
    }

    /// Adds one-off closures (e.g. national days of mourning) and forced open days.
    pub fn with_overrides(
        additional_holidays: Vec<NaiveDate>,
        additional_business_days: Vec<NaiveDate>
    ) -> Result<UsMarketCalendar, CalendarError> {
        let calendar = SimpleCalendar::new(
            HashSet::from([Weekday::Sat, Weekday::Sun]),
            us_market_rules()?,
            additional_holidays,
            additional_business_days
        )?;
        Ok(UsMarketCalendar { calendar })
    }
}

impl HolidayCalendar for UsMarketCalendar {
    fn is_holiday(&self, d: NaiveDate) -> bool {
        self.calendar.is_holiday(d)
    }

    fn get_holiday_set(&self, year: i32) -> Result<HashSet<NaiveDate>, CalendarError> {
        self.calendar.get_holiday_set(year)
    }

    fn get_recurring_holiday_set(&self, year: i32) -> Result<HashSet<NaiveDate>, CalendarError> {
        self.calendar.get_recurring_holiday_set(year)
    }
}
