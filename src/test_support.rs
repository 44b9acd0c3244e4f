use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, TimeZone};

use crate::{
    cli::Cli,
    domain::weather::{
        DailyPoint, ForecastView, HourlyPoint, Location, WeatherCondition, WeatherSnapshot,
        current_description, day_label, hour_label,
    },
};

fn parse_time(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").expect("valid time fixture")
}

pub(crate) fn state_test_cli() -> Cli {
    Cli {
        fps: 30,
        ascii_icons: false,
        emoji_icons: false,
        forecast_url: None,
        log_file: None,
        one_shot: false,
    }
}

pub(crate) fn fixed_now() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2026, 2, 12, 14, 3, 27)
        .single()
        .expect("unambiguous local time fixture")
}

pub(crate) fn sample_current() -> WeatherSnapshot {
    let condition = WeatherCondition::Overcast;
    WeatherSnapshot {
        temp: 7,
        condition,
        humidity: 72,
        wind_speed: 10,
        feels_like: 5,
        description: current_description(&Location::croissy(), condition),
    }
}

pub(crate) fn sample_hourly(count: usize) -> Vec<HourlyPoint> {
    let base = parse_time("2026-02-12T10:00");
    (0..count)
        .map(|idx| {
            let time = base + Duration::hours(i64::try_from(idx).unwrap_or(0));
            HourlyPoint {
                time,
                time_label: hour_label(time),
                temp: 7,
                condition: WeatherCondition::SlightRain,
                precipitation_probability: 35,
                precipitation_mm: 0.4,
            }
        })
        .collect()
}

pub(crate) fn sample_daily() -> Vec<DailyPoint> {
    let base = NaiveDate::from_ymd_opt(2026, 2, 12).expect("valid date fixture");
    (0..7)
        .map(|idx| {
            let date = base + Duration::days(idx);
            let condition = WeatherCondition::Overcast;
            DailyPoint {
                date,
                day_label: day_label(usize::try_from(idx).unwrap_or(0), date),
                high: 8,
                low: 1,
                condition,
                description: Some(condition.label().to_string()),
            }
        })
        .collect()
}

pub(crate) fn sample_forecast() -> ForecastView {
    ForecastView {
        current: sample_current(),
        hourly: sample_hourly(24),
        daily: sample_daily(),
    }
}
