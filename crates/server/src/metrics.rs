//! Prometheus metrics
//!
//! Request counters and chat latency, exposed at /metrics.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Install the Prometheus recorder; returns the render handle
pub fn init_metrics() -> Option<PrometheusHandle> {
    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => Some(handle),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to install Prometheus recorder");
            None
        }
    }
}

/// Count one handled request by endpoint and status
pub fn record_request(endpoint: &'static str, status: &'static str) {
    metrics::counter!("campus_requests_total", "endpoint" => endpoint, "status" => status)
        .increment(1);
}

/// Record end-to-end chat handling latency
pub fn record_chat_latency(seconds: f64) {
    metrics::histogram!("campus_chat_latency_seconds").record(seconds);
}
