//! Acquisition and session behaviour against a mock HTTP endpoint.

use forecast_core::{
    Config, FetchError, FilterCriteria, HttpWeatherSource, Session, WeatherSource, fetch_weather,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sunny_payload() -> serde_json::Value {
    serde_json::json!({
        "days": [
            {
                "datetime": "2024-01-01",
                "description": "Sunny",
                "tempmax": 30,
                "tempmin": 20,
                "icon": "clear-day"
            }
        ]
    })
}

async fn serve(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

fn source_for(server: &MockServer) -> HttpWeatherSource {
    HttpWeatherSource::new(format!("{}/weather", server.uri()))
}

#[tokio::test]
async fn fetch_returns_parsed_payload() {
    let server = MockServer::start().await;
    serve(&server, ResponseTemplate::new(200).set_body_json(sunny_payload())).await;

    let payload = source_for(&server).fetch().await.expect("fetch should succeed");

    assert_eq!(payload.days.len(), 1);
    assert_eq!(payload.days[0].datetime, "2024-01-01");
    assert_eq!(payload.days[0].tempmax, 30.0);
    assert_eq!(payload.days[0].icon, "clear-day");
}

#[tokio::test]
async fn server_error_is_transport_error_regardless_of_body() {
    let server = MockServer::start().await;
    serve(&server, ResponseTemplate::new(500).set_body_json(sunny_payload())).await;

    let mut session = Session::new();
    let err = session.load(&source_for(&server)).await.unwrap_err();

    assert!(matches!(err, FetchError::Transport(_)), "{err:?}");
    assert!(err.to_string().contains("response not ok"));
    assert!(session.view().is_empty());
    assert!(session.error().is_some());

    session.set_criteria(FilterCriteria::from_inputs("sun", "", ""));
    assert!(session.apply_filters().is_empty());
}

#[tokio::test]
async fn not_found_is_transport_error() {
    let server = MockServer::start().await;
    serve(&server, ResponseTemplate::new(404)).await;

    let err = source_for(&server).fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
}

#[tokio::test]
async fn malformed_body_is_parse_error() {
    let server = MockServer::start().await;
    serve(&server, ResponseTemplate::new(200).set_body_string("<html>oops</html>")).await;

    let err = source_for(&server).fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Parse(_)), "{err:?}");
}

#[tokio::test]
async fn payload_without_days_succeeds_with_empty_view() {
    let server = MockServer::start().await;
    serve(
        &server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "timezone": "Asia/Jakarta" })),
    )
    .await;

    let mut session = Session::new();
    let payload = session.load(&source_for(&server)).await.expect("load should succeed");

    assert!(payload.days.is_empty());
    assert!(session.view().is_empty());
    assert_eq!(session.error(), None);
}

#[tokio::test]
async fn unset_endpoint_never_reaches_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sunny_payload()))
        .expect(0)
        .mount(&server)
        .await;

    let cfg = Config::default();
    let endpoint = cfg.endpoint().map(str::to_string).unwrap_or_default();

    let mut session = Session::new();
    let err = session.load(&HttpWeatherSource::new(endpoint)).await.unwrap_err();

    assert!(err.is_configuration());
    assert!(session.view().is_empty());

    let err = fetch_weather(&reqwest::Client::new(), "").await.unwrap_err();
    assert!(err.is_configuration());
}

#[tokio::test]
async fn session_fetches_once_then_filters_in_memory() {
    let server = MockServer::start().await;
    serve(&server, ResponseTemplate::new(200).set_body_json(sunny_payload())).await;

    let source = source_for(&server);
    let mut session = Session::new();
    session.load(&source).await.expect("load should succeed");

    session.set_criteria(FilterCriteria::from_inputs("sun", "25", "22"));
    let view = session.apply_filters();
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].description, "Sunny");

    session.set_criteria(FilterCriteria::from_inputs("", "35", ""));
    assert!(session.apply_filters().is_empty());

    // second load is served from the session; the mock's expect(1) checks on drop
    session.load(&source).await.expect("stored payload");
}
