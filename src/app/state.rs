use anyhow::Result;
use chrono::Local;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::{
    app::{
        controller::{Completion, FetchTicket, ViewController, ViewState},
        events::{AppEvent, start_frame_task},
    },
    cli::{Cli, IconMode},
    data::{error::FetchError, forecast::ForecastClient},
    domain::weather::{ForecastView, Location},
    ui::widgets::hourly::visible_hour_count,
};

mod input;

use input::{KeyCommand, command_from_key};

const DEFAULT_VIEWPORT_WIDTH: u16 = 80;

#[derive(Debug)]
pub struct AppState {
    pub controller: ViewController,
    pub running: bool,
    pub location: Location,
    pub icon_mode: IconMode,
    pub hourly_offset: usize,
    pub viewport_width: u16,
    pub frame_tick: u64,
    forecast_url_override: Option<String>,
    forecast_client: Option<ForecastClient>,
}

impl AppState {
    #[must_use]
    pub fn new(cli: &Cli) -> Self {
        Self {
            controller: ViewController::new(),
            running: true,
            location: Location::croissy(),
            icon_mode: cli.icon_mode(),
            hourly_offset: 0,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            frame_tick: 0,
            forecast_url_override: cli.forecast_url.clone(),
            forecast_client: build_client(cli.forecast_url.as_deref())
                .inspect_err(|err| tracing::warn!(error = %err, "forecast client unavailable"))
                .ok(),
        }
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        self.controller.state()
    }

    pub async fn handle_event(
        &mut self,
        event: AppEvent,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        match event {
            AppEvent::Bootstrap => {
                cli.validate()?;
                start_frame_task(tx.clone(), cli.fps);
                self.start_fetch(tx);
            }
            AppEvent::TickFrame => {
                self.frame_tick = self.frame_tick.saturating_add(1);
            }
            AppEvent::Input(input) => self.handle_input(input, tx).await?,
            AppEvent::FetchCompleted { ticket, result } => {
                self.handle_fetch_completed(ticket, result);
            }
            AppEvent::Quit => {
                self.running = false;
            }
        }
        Ok(())
    }

    /// Issues a new fetch on a background task. Any fetch still in flight
    /// keeps running but its result will be ignored.
    pub fn start_fetch(&mut self, tx: &mpsc::Sender<AppEvent>) -> FetchTicket {
        let ticket = self.controller.begin_fetch();
        let client = self.forecast_client();
        let location = self.location.clone();
        let tx2 = tx.clone();
        tokio::spawn(async move {
            let result = match client {
                Ok(client) => client.fetch(&location).await,
                Err(err) => Err(err),
            };
            let _ = tx2.send(AppEvent::FetchCompleted { ticket, result }).await;
        });
        ticket
    }

    /// Runs a single fetch inline. Used by one-shot mode.
    pub async fn load_once(&mut self) -> &ViewState {
        let ticket = self.controller.begin_fetch();
        let result = match self.forecast_client() {
            Ok(client) => client.fetch(&self.location).await,
            Err(err) => Err(err),
        };
        self.handle_fetch_completed(ticket, result);
        self.controller.state()
    }

    pub(crate) fn handle_fetch_completed(
        &mut self,
        ticket: FetchTicket,
        result: Result<ForecastView, FetchError>,
    ) {
        if self.controller.complete(ticket, result, Local::now()) == Completion::Applied {
            self.hourly_offset = 0;
        }
    }

    /// Handle to the shared client; it is only rebuilt if construction failed earlier.
    pub(crate) fn forecast_client(&mut self) -> Result<ForecastClient, FetchError> {
        if let Some(client) = &self.forecast_client {
            return Ok(client.clone());
        }
        let client = build_client(self.forecast_url_override.as_deref())?;
        self.forecast_client = Some(client.clone());
        Ok(client)
    }

    #[must_use]
    pub fn has_forecast_client(&self) -> bool {
        self.forecast_client.is_some()
    }

    pub(crate) async fn handle_input(
        &mut self,
        event: Event,
        tx: &mpsc::Sender<AppEvent>,
    ) -> Result<()> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_press(key, tx).await?;
            }
            Event::Resize(width, _) => {
                self.viewport_width = width;
                self.hourly_offset = self.hourly_offset.min(self.max_hourly_offset());
            }
            _ => {}
        }
        Ok(())
    }

    async fn handle_key_press(&mut self, key: KeyEvent, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        if matches!(key.code, KeyCode::Char('c' | 'C'))
            && key.modifiers.contains(KeyModifiers::CONTROL)
        {
            tx.send(AppEvent::Quit).await?;
            return Ok(());
        }

        match command_from_key(key) {
            Some(KeyCommand::Quit) => tx.send(AppEvent::Quit).await?,
            Some(KeyCommand::Retry) => {
                self.start_fetch(tx);
            }
            Some(KeyCommand::ScrollLeft) => {
                self.hourly_offset = self.hourly_offset.saturating_sub(1);
            }
            Some(KeyCommand::ScrollRight) => {
                self.hourly_offset = (self.hourly_offset + 1).min(self.max_hourly_offset());
            }
            None => {}
        }
        Ok(())
    }

    #[must_use]
    pub fn max_hourly_offset(&self) -> usize {
        let total = self
            .controller
            .forecast()
            .map_or(0, |loaded| loaded.forecast.hourly.len());
        total.saturating_sub(visible_hour_count(self.viewport_width))
    }
}

fn build_client(url_override: Option<&str>) -> Result<ForecastClient, FetchError> {
    match url_override {
        Some(url) => ForecastClient::with_base_url(url),
        None => ForecastClient::new(),
    }
}
