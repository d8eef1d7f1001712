use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;


use crate::manager::managererror::ManagerError;
use crate::manager::manager::IManager;
use crate::time::calendar::holidaycalendarmanager::{
    HolidayCalendarManager,
    new_holiday_calendar_manager
};


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    holiday_calendar: Vec<serde_json::Value>
}

pub struct Configuration {
    holiday_calendar_manager: HolidayCalendarManager
}


impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            holiday_calendar_manager: new_holiday_calendar_manager()
        }
    }

    pub fn holiday_calendar_manager(&self) -> &HolidayCalendarManager {
        &self.holiday_calendar_manager
    }

    pub fn from_reader<P: AsRef<Path>>(&self, file_path: P) -> Result<(), ManagerError> {
        let file = File::open(file_path.as_ref())?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        self.holiday_calendar_manager.insert_obj_from_json_vec(&json_prop.holiday_calendar)?;
        log::info!(
            "loaded {} holiday calendar(s) from {}",
            json_prop.holiday_calendar.len(),
            file_path.as_ref().display()
        );
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
