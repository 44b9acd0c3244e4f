use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

pub const TODAY_LABEL: &str = "Today";

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[must_use]
pub fn round_temp(value: f64) -> i32 {
    value.round() as i32
}

#[must_use]
pub fn round_percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

#[must_use]
pub fn mm_to_ml(mm: f64) -> f64 {
    mm * 1000.0
}

#[must_use]
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").ok()
}

#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Hour of day without zero padding, e.g. `9:00` or `14:00`.
#[must_use]
pub fn hour_label(time: NaiveDateTime) -> String {
    format!("{}:00", time.hour())
}

#[must_use]
pub fn day_label(index: usize, date: NaiveDate) -> String {
    if index == 0 {
        return TODAY_LABEL.to_string();
    }
    weekday_name(date).to_string()
}

#[must_use]
pub fn weekday_name(date: NaiveDate) -> &'static str {
    DAY_NAMES[date.weekday().num_days_from_sunday() as usize]
}
