use std::sync::Arc;
use std::time::Instant;

use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use prometheus::HistogramOpts;
use prometheus::HistogramVec;
use prometheus::IntCounterVec;
use prometheus::Opts;
use prometheus::Registry;
use prometheus::TextEncoder;

use crate::inbound::http::router::AppState;

/// HTTP request instruments, registered against an injected registry.
///
/// Three process-wide instruments labeled by request path and method:
///
/// - `http_requests_total` — monotonic request counter
/// - `http_request_duration_seconds` — duration histogram
/// - `http_response_status_total` — counter with an additional `status` label
///
/// The underlying prometheus instruments are atomic, so concurrent requests
/// record independently without lost updates. The registry is passed in
/// explicitly rather than being a process global.
pub struct HttpMetrics {
    requests_total: IntCounterVec,
    request_duration_seconds: HistogramVec,
    response_status_total: IntCounterVec,
}

impl HttpMetrics {
    /// Create and register the instruments with the given registry.
    ///
    /// # Errors
    /// Returns an error if an instrument cannot be registered, e.g. a metric
    /// with the same name already exists in the registry.
    pub fn new(registry: &Registry) -> Result<Self, prometheus::Error> {
        let requests_total = IntCounterVec::new(
            Opts::new("http_requests_total", "Total number of http requests"),
            &["path", "method"],
        )?;
        registry.register(Box::new(requests_total.clone()))?;

        let request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "Duration of http requests in seconds",
            ),
            &["path", "method"],
        )?;
        registry.register(Box::new(request_duration_seconds.clone()))?;

        let response_status_total = IntCounterVec::new(
            Opts::new(
                "http_response_status_total",
                "Total number of http responses by status code",
            ),
            &["path", "method", "status"],
        )?;
        registry.register(Box::new(response_status_total.clone()))?;

        Ok(Self {
            requests_total,
            request_duration_seconds,
            response_status_total,
        })
    }

    /// Record one completed request.
    ///
    /// Infallible from the caller's point of view: recording never rejects or
    /// delays the response it describes.
    pub fn record(&self, path: &str, method: &str, status: StatusCode, seconds: f64) {
        self.requests_total.with_label_values(&[path, method]).inc();
        self.request_duration_seconds
            .with_label_values(&[path, method])
            .observe(seconds);
        self.response_status_total
            .with_label_values(&[path, method, status.as_str()])
            .inc();
    }
}

/// Middleware that times every wrapped request and records its outcome.
///
/// Runs inside the auth gate, so only authorized traffic is metered.
pub async fn track(
    State(metrics): State<Arc<HttpMetrics>>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_owned();
    let method = request.method().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    metrics.record(
        &path,
        &method,
        response.status(),
        start.elapsed().as_secs_f64(),
    );

    response
}

/// Handler for the Prometheus scrape endpoint.
pub async fn export(State(state): State<AppState>) -> Response {
    let metric_families = state.registry.gather();

    match TextEncoder::new().encode_to_string(&metric_families) {
        Ok(body) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to encode metrics: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
