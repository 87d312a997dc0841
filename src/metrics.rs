//! Prometheus metrics for request counting.

use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use tracing::debug;

/// Requests counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";

/// Install the global Prometheus recorder and register metric descriptions.
/// Call this once at startup; the returned handle renders the exposition text.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    describe_counter!(
        METRIC_HTTP_REQUESTS,
        "Total number of HTTP requests served, labeled by endpoint"
    );

    debug!("Metrics initialized");
    Ok(handle)
}

/// Increment the request counter for an endpoint.
pub fn inc_requests(endpoint: &'static str) {
    counter!(METRIC_HTTP_REQUESTS, "endpoint" => endpoint).increment(1);
}
