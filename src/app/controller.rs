use chrono::{DateTime, Local};

use crate::{
    data::error::FetchError,
    domain::weather::{ForecastView, LoadedForecast},
};

/// Shown for every fetch failure; the cause only goes to the log.
pub const FETCH_ERROR_MESSAGE: &str = "Unable to retrieve weather data for Croissy-sur-Seine. \
                                       Please check your internet connection.";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Loading,
    Success(LoadedForecast),
    Error(String),
}

/// Identifies one issued fetch. Only the most recent ticket can change state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

impl FetchTicket {
    #[must_use]
    pub fn generation(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Superseded,
}

#[derive(Debug, Default)]
pub struct ViewController {
    state: ViewState,
    generation: u64,
}

impl ViewController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    #[must_use]
    pub fn forecast(&self) -> Option<&LoadedForecast> {
        match &self.state {
            ViewState::Success(loaded) => Some(loaded),
            ViewState::Loading | ViewState::Error(_) => None,
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            ViewState::Error(message) => Some(message),
            ViewState::Loading | ViewState::Success(_) => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading)
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Enters `Loading` and issues a ticket that supersedes all earlier ones.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation = self.generation.wrapping_add(1);
        self.state = ViewState::Loading;
        tracing::debug!(generation = self.generation, "forecast fetch issued");
        FetchTicket(self.generation)
    }

    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<ForecastView, FetchError>,
        now: DateTime<Local>,
    ) -> Completion {
        if ticket.0 != self.generation {
            tracing::debug!(
                generation = ticket.0,
                latest = self.generation,
                ok = result.is_ok(),
                "discarding superseded forecast result"
            );
            return Completion::Superseded;
        }

        self.state = match result {
            Ok(forecast) => {
                tracing::info!(
                    generation = ticket.0,
                    hourly = forecast.hourly.len(),
                    daily = forecast.daily.len(),
                    "forecast loaded"
                );
                ViewState::Success(LoadedForecast {
                    forecast,
                    updated_at: now,
                })
            }
            Err(err) => {
                tracing::warn!(generation = ticket.0, error = %err, "forecast fetch failed");
                ViewState::Error(FETCH_ERROR_MESSAGE.to_string())
            }
        };
        Completion::Applied
    }
}
