use reqwest::Client;
use serde::Deserialize;

use crate::{
    data::{error::FetchError, normalize::normalize},
    domain::weather::{ForecastView, HOURLY_WINDOW, Location},
};

const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
const CURRENT_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,apparent_temperature,weather_code,wind_speed_10m";
const HOURLY_FIELDS: &str = "temperature_2m,weather_code,precipitation_probability,precipitation";
const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min";
const FORECAST_DAYS: usize = 7;

#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
}

impl ForecastClient {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_base_url(FORECAST_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch(&self, location: &Location) -> Result<ForecastView, FetchError> {
        let payload = self.fetch_payload(location).await?;
        Ok(normalize(&payload, location)?)
    }

    pub async fn fetch_payload(&self, location: &Location) -> Result<ForecastPayload, FetchError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&forecast_query(location))
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        tracing::debug!(%status, url = %self.base_url, "forecast response received");
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await.map_err(FetchError::Transport)?;
        Ok(serde_json::from_str(&body)?)
    }
}

fn forecast_query(location: &Location) -> [(&'static str, String); 8] {
    [
        ("latitude", location.latitude.to_string()),
        ("longitude", location.longitude.to_string()),
        ("current", CURRENT_FIELDS.to_string()),
        ("hourly", HOURLY_FIELDS.to_string()),
        ("daily", DAILY_FIELDS.to_string()),
        ("timezone", location.timezone.to_string()),
        ("forecast_days", FORECAST_DAYS.to_string()),
        ("forecast_hours", HOURLY_WINDOW.to_string()),
    ]
}

/// Raw Open-Meteo response; extra fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastPayload {
    pub current: CurrentBlock,
    pub hourly: HourlyBlock,
    pub daily: DailyBlock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentBlock {
    pub temperature_2m: f64,
    pub relative_humidity_2m: f64,
    pub apparent_temperature: f64,
    pub weather_code: i64,
    pub wind_speed_10m: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HourlyBlock {
    pub time: Vec<String>,
    pub temperature_2m: Vec<Option<f64>>,
    pub weather_code: Vec<Option<i64>>,
    pub precipitation_probability: Vec<Option<f64>>,
    pub precipitation: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyBlock {
    pub time: Vec<String>,
    pub weather_code: Vec<Option<i64>>,
    pub temperature_2m_max: Vec<Option<f64>>,
    pub temperature_2m_min: Vec<Option<f64>>,
}
