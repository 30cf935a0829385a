//! Weather resolution tests
//!
//! Uses a base URL nothing listens on, so any provider attempt fails fast
//! and deterministically without touching the network proper.

use crop_backend::error::AppError;
use crop_backend::external::WeatherClient;
use crop_backend::services::WeatherResolver;
use shared::WeatherSource;

fn unreachable_client() -> WeatherClient {
    WeatherClient::with_base_url("http://127.0.0.1:9".to_string())
}

#[tokio::test]
async fn manual_values_used_when_no_city() {
    let resolver = WeatherResolver::new(unreachable_client(), String::new());

    let reading = resolver
        .resolve(None, None, Some(25.0), Some(80.0))
        .await
        .unwrap();

    assert_eq!(reading.temperature, 25.0);
    assert_eq!(reading.humidity, 80.0);
    assert_eq!(reading.source, WeatherSource::Manual);
}

#[tokio::test]
async fn provider_failure_falls_back_to_manual() {
    let resolver = WeatherResolver::new(unreachable_client(), String::new());

    let reading = resolver
        .resolve(Some("Bangkok"), Some("some-key"), Some(31.5), Some(65.0))
        .await
        .unwrap();

    assert_eq!(reading.temperature, 31.5);
    assert_eq!(reading.source, WeatherSource::Manual);
}

#[tokio::test]
async fn provider_failure_without_manual_is_unavailable() {
    let resolver = WeatherResolver::new(unreachable_client(), String::new());

    let err = resolver
        .resolve(Some("Bangkok"), Some("some-key"), None, None)
        .await
        .unwrap_err();

    match &err {
        AppError::WeatherUnavailable(message) => {
            assert!(!message.is_empty(), "provider error text should be carried");
        }
        other => panic!("expected WeatherUnavailable, got {:?}", other),
    }
    assert!(err
        .to_string()
        .contains("Provide 'temperature' and 'humidity' manually."));
}

#[tokio::test]
async fn city_without_any_key_skips_provider() {
    // No per-request key and no configured default: the provider path is
    // never taken, so the manual pair resolves without a network attempt.
    let resolver = WeatherResolver::new(unreachable_client(), String::new());

    let reading = resolver
        .resolve(Some("Bangkok"), None, Some(20.0), Some(50.0))
        .await
        .unwrap();

    assert_eq!(reading.source, WeatherSource::Manual);
}

#[tokio::test]
async fn empty_keys_count_as_absent() {
    let resolver = WeatherResolver::new(unreachable_client(), String::new());

    let err = resolver
        .resolve(Some("Bangkok"), Some(""), None, None)
        .await
        .unwrap_err();

    // No usable key means no provider attempt, so the error carries the
    // no-credentials text rather than a connection failure.
    assert!(err.to_string().contains("no city or API key provided"));
}

#[tokio::test]
async fn missing_humidity_alone_is_not_enough() {
    let resolver = WeatherResolver::new(unreachable_client(), String::new());

    let err = resolver.resolve(None, None, Some(25.0), None).await.unwrap_err();
    assert!(matches!(err, AppError::WeatherUnavailable(_)));
}
