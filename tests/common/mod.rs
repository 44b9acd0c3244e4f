#![allow(dead_code)]

use chrono::{Duration, NaiveDate, NaiveDateTime};
use croissy_weather::cli::Cli;
use serde_json::{Value, json};

pub fn cli() -> Cli {
    Cli {
        fps: 30,
        ascii_icons: false,
        emoji_icons: false,
        forecast_url: None,
        log_file: None,
        one_shot: false,
    }
}

pub fn cli_for(url: &str) -> Cli {
    Cli {
        forecast_url: Some(url.to_string()),
        ..cli()
    }
}

fn hourly_times(hours: usize) -> Vec<String> {
    let base = NaiveDateTime::parse_from_str("2026-02-12T09:00", "%Y-%m-%dT%H:%M")
        .expect("valid base time");
    (0..hours)
        .map(|idx| {
            let offset = i64::try_from(idx).expect("small index");
            (base + Duration::hours(offset))
                .format("%Y-%m-%dT%H:%M")
                .to_string()
        })
        .collect()
}

fn daily_times(days: usize) -> Vec<String> {
    let base = NaiveDate::from_ymd_opt(2026, 2, 12).expect("valid base date");
    (0..days)
        .map(|idx| {
            let offset = i64::try_from(idx).expect("small index");
            (base + Duration::days(offset)).format("%Y-%m-%d").to_string()
        })
        .collect()
}

/// An Open-Meteo style body with `hours` hourly entries and seven days.
pub fn forecast_payload(hours: usize) -> Value {
    let temps: Vec<f64> = (0..hours).map(|idx| 5.0 + idx as f64 * 0.3).collect();
    json!({
        "latitude": 48.88,
        "longitude": 2.14,
        "timezone": "Europe/Paris",
        "current": {
            "time": "2026-02-12T09:00",
            "temperature_2m": 14.6,
            "relative_humidity_2m": 81.0,
            "apparent_temperature": 12.2,
            "weather_code": 3,
            "wind_speed_10m": 11.4
        },
        "hourly": {
            "time": hourly_times(hours),
            "temperature_2m": temps,
            "weather_code": vec![61; hours],
            "precipitation_probability": vec![40.0; hours],
            "precipitation": vec![0.4; hours]
        },
        "daily": {
            "time": daily_times(7),
            "weather_code": [3, 61, 0, 999, 71, 95, 45],
            "temperature_2m_max": [9.4, 8.1, 11.0, 10.2, 2.5, 13.7, 7.0],
            "temperature_2m_min": [2.1, 3.3, 4.0, 1.2, -1.6, 6.4, 0.5]
        }
    })
}
