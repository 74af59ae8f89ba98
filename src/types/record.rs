use crate::types::season::Season;
use chrono::NaiveDate;
use serde::Serialize;

/// One row of the daily rental table.
#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct DailyRecord {
    pub date: NaiveDate,   // calendar date, unique per table
    pub season: Season,    // season code 1-4
    pub total: u32,        // cnt
    pub registered: u32,   // registered
    pub casual: u32,       // casual
    pub temp: f64,         // normalized temperature
    pub hum: f64,          // normalized humidity
}

/// One row of the hourly rental table.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub struct HourlyRecord {
    pub hour: u32,  // hour of day, 0-23
    pub total: u32, // cnt
}
