//! Plain-text rendering of a loaded forecast for `--one-shot`.

use crate::domain::weather::{DailyPoint, HourlyPoint, LoadedForecast, Location, WeatherSnapshot};

#[must_use]
pub fn render_report(location: &Location, loaded: &LoadedForecast) -> String {
    let forecast = &loaded.forecast;
    let mut lines = vec![
        location_line(location),
        current_line(&forecast.current),
        forecast.current.description.clone(),
        String::new(),
        "Hourly".to_string(),
    ];
    lines.extend(forecast.hourly.iter().map(|hour| format!("  {}", hourly_line(hour))));
    lines.push(String::new());
    lines.push("7-Day Forecast".to_string());
    lines.extend(forecast.daily.iter().map(|day| format!("  {}", daily_line(day))));
    lines.push(String::new());
    lines.push(format!("Last updated {}", loaded.updated_label()));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn location_line(location: &Location) -> String {
    format!("{}, {}", location.name, location.region)
}

fn current_line(current: &WeatherSnapshot) -> String {
    format!(
        "Now {}°C {} | feels like {}°C | wind {} km/h | humidity {}%",
        current.temp,
        current.condition_label(),
        current.feels_like,
        current.wind_speed,
        current.humidity
    )
}

fn hourly_line(hour: &HourlyPoint) -> String {
    format!(
        "{:>5}  {:>4}  {:<24} {:>3}%  {:.1} mm",
        hour.time_label,
        format!("{}°C", hour.temp),
        hour.condition_label(),
        hour.precipitation_probability,
        hour.precipitation_mm
    )
}

fn daily_line(day: &DailyPoint) -> String {
    format!(
        "{:<5}  {:>4} / {:<4}  {}",
        day.day_label,
        format!("{}°C", day.high),
        format!("{}°C", day.low),
        day.condition_label()
    )
}
