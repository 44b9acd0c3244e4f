use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tokio::{sync::mpsc, time::interval};

use crate::{
    app::controller::FetchTicket, data::error::FetchError, domain::weather::ForecastView,
};

#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    TickFrame,
    Input(Event),
    FetchCompleted {
        ticket: FetchTicket,
        result: Result<ForecastView, FetchError>,
    },
    Quit,
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}

pub fn start_frame_task(tx: mpsc::Sender<AppEvent>, fps: u8) {
    let fps = fps.max(15);
    tokio::spawn(async move {
        let mut ticker = interval(Duration::from_millis(1000_u64 / u64::from(fps)));
        loop {
            ticker.tick().await;
            if tx.send(AppEvent::TickFrame).await.is_err() {
                break;
            }
        }
    });
}
