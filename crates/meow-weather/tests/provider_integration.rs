//! Integration tests for WeatherProvider and Geocoder using wiremock.

use meow_weather::{Geocoder, Location, WeatherCondition, WeatherProvider};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn shanghai() -> Location {
    Location::new(31.23, 121.47)
}

async fn mount_forecast(server: &MockServer, temperature: f64, code: i32, uv: Option<f64>) {
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("current_weather", "true"))
        .and(query_param("daily", "uv_index_max"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "current_weather": { "temperature": temperature, "weathercode": code },
            "daily": { "uv_index_max": [uv] }
        })))
        .mount(server)
        .await;
}

async fn mount_air_quality(server: &MockServer, aqi: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/v1/air-quality"))
        .and(query_param("current", "us_aqi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "current": { "us_aqi": aqi }
        })))
        .mount(server)
        .await;
}

async fn mount_reverse(server: &MockServer, address: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/reverse"))
        .and(query_param("format", "json"))
        .and(query_param("zoom", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "address": address
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_current_conditions() {
    let server = MockServer::start().await;
    mount_forecast(&server, 18.6, 63, Some(6.5)).await;

    let provider = WeatherProvider::new(&server.uri(), &server.uri()).unwrap();
    let current = provider.current(&shanghai()).await.unwrap();

    assert_eq!(current.condition, WeatherCondition::Rain);
    assert_eq!(current.temperature, 18.6);
    assert_eq!(current.uv_index_max, Some(6.5));
}

#[tokio::test]
async fn test_current_missing_block_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let provider = WeatherProvider::new(&server.uri(), &server.uri()).unwrap();
    let result = provider.current(&shanghai()).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_air_quality_rounds() {
    let server = MockServer::start().await;
    mount_air_quality(&server, serde_json::json!(151.6)).await;

    let provider = WeatherProvider::new(&server.uri(), &server.uri()).unwrap();
    assert_eq!(provider.air_quality(&shanghai()).await.unwrap(), Some(152));
}

#[tokio::test]
async fn test_air_quality_null() {
    let server = MockServer::start().await;
    mount_air_quality(&server, serde_json::Value::Null).await;

    let provider = WeatherProvider::new(&server.uri(), &server.uri()).unwrap();
    assert_eq!(provider.air_quality(&shanghai()).await.unwrap(), None);
}

#[tokio::test]
async fn test_observe_combines_all_sources() {
    let server = MockServer::start().await;
    mount_forecast(&server, 27.4, 0, Some(8.2)).await;
    mount_air_quality(&server, serde_json::json!(42)).await;
    mount_reverse(&server, serde_json::json!({ "town": "Catford", "county": "Greater Paws" })).await;

    let provider = WeatherProvider::new(&server.uri(), &server.uri()).unwrap();
    let geocoder = Geocoder::new(&server.uri()).unwrap();
    let snapshot = provider.observe(&shanghai(), &geocoder).await;

    assert_eq!(snapshot.temp, 27);
    assert_eq!(snapshot.condition, WeatherCondition::Clear);
    assert_eq!(snapshot.city, "Catford");
    assert_eq!(snapshot.uv_index, Some(8.2));
    assert_eq!(snapshot.aqi, Some(42));
}

#[tokio::test]
async fn test_observe_degrades_each_piece() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/air-quality"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    mount_reverse(&server, serde_json::json!({})).await;

    let provider = WeatherProvider::new(&server.uri(), &server.uri()).unwrap();
    let geocoder = Geocoder::new(&server.uri()).unwrap();
    let snapshot = provider.observe(&shanghai(), &geocoder).await;

    assert_eq!(snapshot.temp, 22);
    assert_eq!(snapshot.condition, WeatherCondition::Clear);
    assert_eq!(snapshot.city, "Local Area");
    assert!(snapshot.uv_index.is_none());
    assert!(snapshot.aqi.is_none());
}

#[tokio::test]
async fn test_observe_geocode_failure_keeps_default_city() {
    let server = MockServer::start().await;
    mount_forecast(&server, 10.0, 71, None).await;
    mount_air_quality(&server, serde_json::json!(120)).await;
    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let provider = WeatherProvider::new(&server.uri(), &server.uri()).unwrap();
    let geocoder = Geocoder::new(&server.uri()).unwrap();
    let snapshot = provider.observe(&shanghai(), &geocoder).await;

    assert_eq!(snapshot.condition, WeatherCondition::Snow);
    assert_eq!(snapshot.city, "Cat City");
    assert_eq!(snapshot.aqi, Some(120));
}

#[tokio::test]
async fn test_reverse_prefers_city() {
    let server = MockServer::start().await;
    mount_reverse(
        &server,
        serde_json::json!({ "city": "Shanghai", "town": "Nope", "county": "Nope" }),
    )
    .await;

    let geocoder = Geocoder::new(&server.uri()).unwrap();
    let name = geocoder.reverse(&shanghai()).await.unwrap();
    assert_eq!(name.as_deref(), Some("Shanghai"));
}
