use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

mod conditions;
mod conversions;

pub use conditions::{
    DEFAULT_CONDITION_LABEL, DEFAULT_DESCRIPTION_LABEL, WeatherCategory, WeatherCondition,
};
pub use conversions::{
    TODAY_LABEL, day_label, hour_label, mm_to_ml, parse_date, parse_datetime, round_percent,
    round_temp, weekday_name,
};

pub const HOURLY_WINDOW: usize = 24;

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: &'static str,
    pub region: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: &'static str,
}

impl Location {
    /// The single place this dashboard reports on.
    #[must_use]
    pub const fn croissy() -> Self {
        Self {
            name: "Croissy-sur-Seine",
            region: "Ile-de-France, France",
            latitude: 48.878,
            longitude: 2.144,
            timezone: "Europe/Paris",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub temp: i32,
    pub condition: WeatherCondition,
    pub humidity: u8,
    pub wind_speed: i32,
    pub feels_like: i32,
    pub description: String,
}

impl WeatherSnapshot {
    #[must_use]
    pub fn condition_label(&self) -> &'static str {
        self.condition.label()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourlyPoint {
    pub time: NaiveDateTime,
    pub time_label: String,
    pub temp: i32,
    pub condition: WeatherCondition,
    pub precipitation_probability: u8,
    pub precipitation_mm: f64,
}

impl HourlyPoint {
    #[must_use]
    pub fn condition_label(&self) -> &'static str {
        self.condition.label()
    }

    #[must_use]
    pub fn precipitation_ml(&self) -> f64 {
        mm_to_ml(self.precipitation_mm)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub day_label: String,
    pub high: i32,
    pub low: i32,
    pub condition: WeatherCondition,
    pub description: Option<String>,
}

impl DailyPoint {
    #[must_use]
    pub fn condition_label(&self) -> &'static str {
        self.condition.label()
    }
}

/// Normalized output of one forecast payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastView {
    pub current: WeatherSnapshot,
    pub hourly: Vec<HourlyPoint>,
    pub daily: Vec<DailyPoint>,
}

impl ForecastView {
    #[must_use]
    pub fn total_precipitation_mm(&self) -> f64 {
        self.hourly.iter().map(|h| h.precipitation_mm).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedForecast {
    pub forecast: ForecastView,
    pub updated_at: DateTime<Local>,
}

impl LoadedForecast {
    #[must_use]
    pub fn updated_label(&self) -> String {
        self.updated_at.format("%H:%M:%S").to_string()
    }
}

#[must_use]
pub fn current_description(location: &Location, condition: WeatherCondition) -> String {
    format!(
        "Current condition in {} is {}.",
        location.name,
        condition.description_label()
    )
}
