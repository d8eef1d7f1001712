use std::collections::HashSet;
use std::sync::Arc;

use chrono::{NaiveDate, Weekday};
use serde::Deserialize;
use serde_json;

use crate::manager::manager::Manager;
use crate::manager::managererror::{ManagerError, parse_json_value};
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::simplecalendar::SimpleCalendar;
use crate::time::calendar::usmarket::UsMarketCalendar;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::nthweekdayholiday::NthWeekdayHoliday;
use crate::time::recurringholiday::lastweekdayholiday::LastWeekdayHoliday;
use crate::time::recurringholiday::easterrelatedholiday::EasterRelatedHoliday;
use crate::time::recurringholiday::shiftedholiday::ShiftedHoliday;

pub type HolidayCalendarManager = Manager<Arc<dyn HolidayCalendar>>;

pub fn new_holiday_calendar_manager() -> HolidayCalendarManager {
    Manager::new(get_calendar_from_json)
}

#[derive(Deserialize)]
struct EasterRelatedHolidayJsonProp {
    shift_days: i32
}

fn easter_related_holiday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: EasterRelatedHolidayJsonProp = parse_json_value(json)?;
    Ok(Arc::new(EasterRelatedHoliday::new(json_prop.shift_days)))
}

#[derive(Deserialize)]
struct NthWeekdayHolidayJsonProp {
    month: u32,
    n: u8,
    weekday: Weekday,
}

fn nth_weekday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: NthWeekdayHolidayJsonProp = parse_json_value(json)?;
    Ok(Arc::new(NthWeekdayHoliday::new(json_prop.month, json_prop.n, json_prop.weekday)?))
}

#[derive(Deserialize)]
struct LastWeekdayHolidayJsonProp {
    month: u32,
    weekday: Weekday,
}

fn last_weekday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: LastWeekdayHolidayJsonProp = parse_json_value(json)?;
    Ok(Arc::new(LastWeekdayHoliday::new(json_prop.month, json_prop.weekday)?))
}

#[derive(Deserialize)]
struct FixedDateHolidayJsonProp {
    month: u32,
    day: u32,
    #[serde(default)]
    effective_from: Option<i32>
}

fn fixed_date_holiday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: FixedDateHolidayJsonProp = parse_json_value(json)?;
    let holiday = FixedDateHoliday::new(json_prop.month, json_prop.day)?;
    let holiday = match json_prop.effective_from {
        Some(year) => holiday.effective_from(year),
        None => holiday
    };
    Ok(Arc::new(holiday))
}

#[derive(Deserialize)]
struct ShiftedHolidayJsonProp {
    shift_days: i32,
    base: serde_json::Value
}

fn shifted_holiday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: ShiftedHolidayJsonProp = parse_json_value(json)?;
    let base = get_recurring_holiday_from_json(json_prop.base)?;
    Ok(Arc::new(ShiftedHoliday::new(base, json_prop.shift_days)?))
}

#[derive(Deserialize)]
enum HolidayType {
    EasterRelated,
    FixedDate,
    NthWeekday,
    LastWeekday,
    Shifted
}

#[derive(Deserialize)]
struct HolidayTypedObject {
    holiday_type: HolidayType
}

pub fn get_recurring_holiday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let holiday_type_obj: HolidayTypedObject = parse_json_value(json.clone())?;
    match holiday_type_obj.holiday_type {
        HolidayType::EasterRelated => easter_related_holiday_from_json(json),
        HolidayType::FixedDate     => fixed_date_holiday_from_json(json),
        HolidayType::LastWeekday   => last_weekday_from_json(json),
        HolidayType::NthWeekday    => nth_weekday_from_json(json),
        HolidayType::Shifted       => shifted_holiday_from_json(json)
    }
}

#[derive(Deserialize)]
enum CalendarType {
    SimpleCalendar,
    UsMarket
}

#[derive(Deserialize)]
struct CalendarTypedObject {
    calendar_type: CalendarType
}

#[derive(Deserialize)]
struct SimpleCalendarJsonProp {
    weekends: HashSet<Weekday>,
    recurring_holidays: Vec<serde_json::Value>,
    #[serde(default)]
    additional_holidays: Vec<NaiveDate>,
    #[serde(default)]
    additional_business_days: Vec<NaiveDate>
}

fn get_simple_calendar_from_json(json_value: serde_json::Value) -> Result<Arc<dyn HolidayCalendar>, ManagerError> {
    let holiday_calendar_json: SimpleCalendarJsonProp = parse_json_value(json_value)?;
    let recurring_holidays = holiday_calendar_json
        .recurring_holidays
        .into_iter()
        .map(get_recurring_holiday_from_json)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Arc::new(SimpleCalendar::new(
        holiday_calendar_json.weekends,
        recurring_holidays,
        holiday_calendar_json.additional_holidays,
        holiday_calendar_json.additional_business_days
    )?))
}

#[derive(Deserialize)]
struct UsMarketCalendarJsonProp {
    #[serde(default)]
    additional_holidays: Vec<NaiveDate>,
    #[serde(default)]
    additional_business_days: Vec<NaiveDate>
}

fn get_us_market_calendar_from_json(json_value: serde_json::Value) -> Result<Arc<dyn HolidayCalendar>, ManagerError> {
    let json_prop: UsMarketCalendarJsonProp = parse_json_value(json_value)?;
    Ok(Arc::new(UsMarketCalendar::with_overrides(
        json_prop.additional_holidays,
        json_prop.additional_business_days
    )?))
}

pub fn get_calendar_from_json(json_value: serde_json::Value) -> Result<Arc<dyn HolidayCalendar>, ManagerError> {
    let calendar_typed_object: CalendarTypedObject = parse_json_value(json_value.clone())?;
    match calendar_typed_object.calendar_type {
        CalendarType::SimpleCalendar => get_simple_calendar_from_json(json_value),
        CalendarType::UsMarket       => get_us_market_calendar_from_json(json_value)
    }
}
