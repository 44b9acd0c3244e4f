use reqwest::StatusCode;

/// Why a payload could not be turned into a [`ForecastView`].
///
/// [`ForecastView`]: crate::domain::weather::ForecastView
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    #[error("{series}.{field} has no value at index {index}")]
    MissingValue {
        series: &'static str,
        field: &'static str,
        index: usize,
    },
    #[error("invalid {series} timestamp {value:?}")]
    InvalidTimestamp { series: &'static str, value: String },
}

/// Every way a forecast fetch can fail.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("forecast request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("forecast request returned non-success status {0}")]
    Status(StatusCode),
    #[error("failed to parse forecast payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("failed to normalize forecast payload: {0}")]
    Normalize(#[from] NormalizeError),
}
