mod common;

use common::{cli_for, forecast_payload};
use croissy_weather::{
    app::{
        controller::{FETCH_ERROR_MESSAGE, ViewState},
        events::AppEvent,
        state::AppState,
    },
    cli::Cli,
    data::{error::FetchError, forecast::ForecastClient},
    domain::weather::Location,
};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, query_param},
};

async fn mount_success(server: &MockServer, hours: usize) {
    Mock::given(method("GET"))
        .and(query_param("latitude", "48.878"))
        .and(query_param("longitude", "2.144"))
        .and(query_param("timezone", "Europe/Paris"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_payload(hours)))
        .mount(server)
        .await;
}

async fn mount_failure(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Waits for the next fetch completion and feeds it back into the state.
async fn drive_fetch(
    app: &mut AppState,
    cli: &Cli,
    tx: &mpsc::Sender<AppEvent>,
    rx: &mut mpsc::Receiver<AppEvent>,
) {
    loop {
        match rx.recv().await {
            Some(event @ AppEvent::FetchCompleted { .. }) => {
                app.handle_event(event, tx, cli).await.expect("fetch event");
                return;
            }
            Some(_) => {}
            None => panic!("event channel closed"),
        }
    }
}

#[tokio::test]
async fn loading_then_success_populates_view() {
    let server = MockServer::start().await;
    mount_success(&server, 48).await;
    let cli = cli_for(&server.uri());
    let mut app = AppState::new(&cli);
    let (tx, mut rx) = mpsc::channel(16);

    assert_eq!(app.view(), &ViewState::Loading);
    app.start_fetch(&tx);
    assert!(app.controller.is_loading());
    drive_fetch(&mut app, &cli, &tx, &mut rx).await;

    let loaded = app.controller.forecast().expect("forecast loaded");
    let forecast = &loaded.forecast;
    assert_eq!(forecast.current.temp, 15);
    assert_eq!(forecast.current.condition_label(), "Overcast");
    assert_eq!(
        forecast.current.description,
        "Current condition in Croissy-sur-Seine is Overcast."
    );
    assert_eq!(forecast.hourly.len(), 24);
    assert_eq!(forecast.hourly[0].time_label, "9:00");
    assert!((forecast.hourly[0].precipitation_ml() - 400.0).abs() < f64::EPSILON);
    assert_eq!(forecast.daily.len(), 7);
    assert_eq!(forecast.daily[0].day_label, "Today");
    assert_eq!(forecast.daily[3].condition_label(), "Clear");
    assert_eq!(forecast.daily[5].condition_label(), "Thunderstorm");
}

#[tokio::test]
async fn server_error_ends_in_error_view_without_stale_data() {
    let server = MockServer::start().await;
    mount_failure(&server, 500).await;
    let cli = cli_for(&server.uri());
    let mut app = AppState::new(&cli);
    let (tx, mut rx) = mpsc::channel(16);

    app.start_fetch(&tx);
    drive_fetch(&mut app, &cli, &tx, &mut rx).await;

    assert_eq!(app.view(), &ViewState::Error(FETCH_ERROR_MESSAGE.to_string()));
    assert!(app.controller.forecast().is_none());
}

#[tokio::test]
async fn retry_key_recovers_after_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_success(&server, 24).await;
    let cli = cli_for(&server.uri());
    let mut app = AppState::new(&cli);
    let (tx, mut rx) = mpsc::channel(16);

    app.start_fetch(&tx);
    drive_fetch(&mut app, &cli, &tx, &mut rx).await;
    assert!(app.controller.error_message().is_some());

    let retry = Event::Key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE));
    app.handle_event(AppEvent::Input(retry), &tx, &cli)
        .await
        .expect("retry");
    assert_eq!(app.view(), &ViewState::Loading);

    drive_fetch(&mut app, &cli, &tx, &mut rx).await;
    assert!(app.controller.forecast().is_some());
    assert!(app.controller.error_message().is_none());
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"current\": 1}"))
        .mount(&server)
        .await;

    let client = ForecastClient::with_base_url(server.uri()).expect("client");
    let err = client
        .fetch(&Location::croissy())
        .await
        .expect_err("decode should fail");
    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let server = MockServer::start().await;
    mount_failure(&server, 404).await;

    let client = ForecastClient::with_base_url(server.uri()).expect("client");
    let err = client
        .fetch(&Location::croissy())
        .await
        .expect_err("status should fail");
    assert!(matches!(err, FetchError::Status(status) if status.as_u16() == 404));
}

#[tokio::test]
async fn load_once_returns_settled_state() {
    let server = MockServer::start().await;
    mount_success(&server, 24).await;
    let mut app = AppState::new(&cli_for(&server.uri()));

    let state = app.load_once().await;
    let ViewState::Success(loaded) = state else {
        panic!("expected success, got {state:?}");
    };
    assert_eq!(loaded.forecast.hourly.len(), 24);

    let requests = server.received_requests().await.expect("recorded requests");
    assert_eq!(requests.len(), 1);
    let query = requests[0].url.query().unwrap_or_default();
    assert!(query.contains("forecast_hours=24"));
    assert!(query.contains("forecast_days=7"));
}
