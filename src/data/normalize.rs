//! Shapes the raw Open-Meteo payload into display-ready records.

use crate::{
    data::{
        error::NormalizeError,
        forecast::{CurrentBlock, DailyBlock, ForecastPayload, HourlyBlock},
    },
    domain::weather::{
        DailyPoint, ForecastView, HOURLY_WINDOW, HourlyPoint, Location, WeatherCondition,
        WeatherSnapshot, current_description, day_label, hour_label, parse_date, parse_datetime,
        round_percent, round_temp,
    },
};

/// Builds the current, hourly and daily views from one payload.
///
/// Hourly entries are capped at [`HOURLY_WINDOW`]; daily entries are taken in
/// full. Any missing series value fails the whole payload.
pub fn normalize(
    payload: &ForecastPayload,
    location: &Location,
) -> Result<ForecastView, NormalizeError> {
    Ok(ForecastView {
        current: normalize_current(&payload.current, location),
        hourly: normalize_hourly(&payload.hourly)?,
        daily: normalize_daily(&payload.daily)?,
    })
}

fn normalize_current(current: &CurrentBlock, location: &Location) -> WeatherSnapshot {
    let condition = WeatherCondition::from_code(current.weather_code);
    WeatherSnapshot {
        temp: round_temp(current.temperature_2m),
        condition,
        humidity: round_percent(current.relative_humidity_2m),
        wind_speed: round_temp(current.wind_speed_10m),
        feels_like: round_temp(current.apparent_temperature),
        description: current_description(location, condition),
    }
}

fn normalize_hourly(hourly: &HourlyBlock) -> Result<Vec<HourlyPoint>, NormalizeError> {
    const SERIES: &str = "hourly";
    hourly
        .time
        .iter()
        .take(HOURLY_WINDOW)
        .enumerate()
        .map(|(idx, raw_time)| -> Result<HourlyPoint, NormalizeError> {
            let time = parse_datetime(raw_time).ok_or_else(|| NormalizeError::InvalidTimestamp {
                series: SERIES,
                value: raw_time.clone(),
            })?;
            let code = value_at(&hourly.weather_code, SERIES, "weather_code", idx)?;
            Ok(HourlyPoint {
                time,
                time_label: hour_label(time),
                temp: round_temp(value_at(&hourly.temperature_2m, SERIES, "temperature_2m", idx)?),
                condition: WeatherCondition::from_code(code),
                precipitation_probability: round_percent(value_at(
                    &hourly.precipitation_probability,
                    SERIES,
                    "precipitation_probability",
                    idx,
                )?),
                precipitation_mm: value_at(&hourly.precipitation, SERIES, "precipitation", idx)?,
            })
        })
        .collect()
}

fn normalize_daily(daily: &DailyBlock) -> Result<Vec<DailyPoint>, NormalizeError> {
    const SERIES: &str = "daily";
    daily
        .time
        .iter()
        .enumerate()
        .map(|(idx, raw_date)| -> Result<DailyPoint, NormalizeError> {
            let date = parse_date(raw_date).ok_or_else(|| NormalizeError::InvalidTimestamp {
                series: SERIES,
                value: raw_date.clone(),
            })?;
            let condition =
                WeatherCondition::from_code(value_at(&daily.weather_code, SERIES, "weather_code", idx)?);
            Ok(DailyPoint {
                date,
                day_label: day_label(idx, date),
                high: round_temp(value_at(
                    &daily.temperature_2m_max,
                    SERIES,
                    "temperature_2m_max",
                    idx,
                )?),
                low: round_temp(value_at(
                    &daily.temperature_2m_min,
                    SERIES,
                    "temperature_2m_min",
                    idx,
                )?),
                condition,
                description: Some(condition.label().to_string()),
            })
        })
        .collect()
}

fn value_at<T: Copy>(
    values: &[Option<T>],
    series: &'static str,
    field: &'static str,
    index: usize,
) -> Result<T, NormalizeError> {
    values
        .get(index)
        .copied()
        .flatten()
        .ok_or(NormalizeError::MissingValue {
            series,
            field,
            index,
        })
}
