pub mod configuration;
pub mod error;

pub mod gap {
    pub mod gapanalysis;
}

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod time {
    pub mod utility;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod fixeddateholiday;
        pub mod nthweekdayholiday;
        pub mod lastweekdayholiday;
        pub mod easterrelatedholiday;
        pub mod shiftedholiday;
    }

    pub mod calendar {
        pub mod holidaycalendar;
        pub mod simplecalendar;
        pub mod usmarket;
        pub mod holidaycalendarmanager;
    }
}

pub use error::CalendarError;
pub use time::calendar::usmarket::{easter_sunday, holidays_for_year, UsMarketCalendar};
