use std::sync::Arc;

use axum::middleware;
use axum::routing::get;
use axum::Router;
use garage_service::inbound::http::metrics::track;
use garage_service::inbound::http::metrics::HttpMetrics;
use prometheus::Registry;
use prometheus::TextEncoder;
use reqwest::StatusCode;

/// Spawn a minimal router with only the metrics recorder attached.
async fn spawn_metered_app() -> (String, Registry) {
    let registry = Registry::new();
    let metrics = Arc::new(HttpMetrics::new(&registry).expect("Failed to register metrics"));

    let app = Router::new()
        .route("/hit", get(|| async { "ok" }))
        .route_layer(middleware::from_fn_with_state(metrics, track));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server crashed");
    });

    (address, registry)
}

fn find_sample<'a>(exposition: &'a str, name: &str, labels: &[&str]) -> Option<&'a str> {
    exposition
        .lines()
        .find(|line| line.starts_with(name) && labels.iter().all(|label| line.contains(label)))
}

#[tokio::test]
async fn test_concurrent_requests_count_exactly() {
    let (address, registry) = spawn_metered_app().await;
    let client = reqwest::Client::new();

    const REQUESTS: usize = 25;

    let mut handles = Vec::with_capacity(REQUESTS);
    for _ in 0..REQUESTS {
        let client = client.clone();
        let url = format!("{}/hit", address);
        handles.push(tokio::spawn(async move {
            client.get(url).send().await.expect("request failed")
        }));
    }

    for handle in handles {
        let response = handle.await.expect("task panicked");
        assert_eq!(response.status(), StatusCode::OK);
    }

    let exposition = TextEncoder::new()
        .encode_to_string(&registry.gather())
        .expect("Failed to encode metrics");

    let counter = find_sample(
        &exposition,
        "http_requests_total",
        &["path=\"/hit\"", "method=\"GET\""],
    )
    .expect("request counter should be exposed");
    assert!(
        counter.trim_end().ends_with(&format!(" {}", REQUESTS)),
        "unexpected sample: {}",
        counter
    );

    let status_counter = find_sample(
        &exposition,
        "http_response_status_total",
        &["path=\"/hit\"", "method=\"GET\"", "status=\"200\""],
    )
    .expect("status counter should be exposed");
    assert!(
        status_counter.trim_end().ends_with(&format!(" {}", REQUESTS)),
        "unexpected sample: {}",
        status_counter
    );
}

#[tokio::test]
async fn test_duration_histogram_observes_every_request() {
    let (address, registry) = spawn_metered_app().await;
    let client = reqwest::Client::new();

    for _ in 0..3 {
        let response = client
            .get(format!("{}/hit", address))
            .send()
            .await
            .expect("request failed");
        assert_eq!(response.status(), StatusCode::OK);
    }

    let exposition = TextEncoder::new()
        .encode_to_string(&registry.gather())
        .expect("Failed to encode metrics");

    let histogram_count = find_sample(
        &exposition,
        "http_request_duration_seconds_count",
        &["path=\"/hit\"", "method=\"GET\""],
    )
    .expect("histogram count should be exposed");
    assert!(
        histogram_count.trim_end().ends_with(" 3"),
        "unexpected sample: {}",
        histogram_count
    );
}

#[tokio::test]
async fn test_unmatched_route_is_not_metered() {
    let (address, registry) = spawn_metered_app().await;

    // No route matches, so the router answers 404 inside the metered stack.
    let response = reqwest::Client::new()
        .get(format!("{}/missing", address))
        .send()
        .await
        .expect("request failed");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let exposition = TextEncoder::new()
        .encode_to_string(&registry.gather())
        .expect("Failed to encode metrics");

    // route_layer only wraps matched routes; an unmatched path never reaches
    // the recorder.
    assert!(find_sample(
        &exposition,
        "http_response_status_total",
        &["path=\"/missing\""],
    )
    .is_none());
}
