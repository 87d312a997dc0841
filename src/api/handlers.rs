//! HTTP API handlers.

use axum::{extract::State, response::IntoResponse, Json};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use std::sync::Arc;

use crate::config::Config;
use crate::metrics;

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "devsecops-demo";

/// Application state shared with handlers.
///
/// The configuration is immutable for the process lifetime, so every handler
/// is a pure function of it; repeated requests produce identical bodies.
#[derive(Clone)]
pub struct AppState {
    /// Startup configuration.
    pub config: Arc<Config>,
    /// Handle for rendering the Prometheus exposition text.
    pub metrics: PrometheusHandle,
}

impl AppState {
    /// Create new app state.
    pub fn new(config: Config, metrics: PrometheusHandle) -> Self {
        Self {
            config: Arc::new(config),
            metrics,
        }
    }
}

/// Root informational response.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    /// Human-readable service description.
    pub message: &'static str,
    /// Deployment environment name from configuration.
    pub environment: String,
    /// Service status: "running".
    pub status: &'static str,
    /// Version string from configuration.
    pub version: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "healthy".
    pub status: &'static str,
    /// Service identifier.
    pub service: &'static str,
}

/// Version response.
#[derive(Debug, Serialize)]
pub struct VersionResponse {
    /// Version string from configuration.
    pub version: String,
}

/// Root handler - returns the static informational payload.
pub async fn root(State(state): State<AppState>) -> impl IntoResponse {
    metrics::inc_requests("/");

    Json(RootResponse {
        message: "DevSecOps pipeline demo",
        environment: state.config.app_env.clone(),
        status: "running",
        version: state.config.app_version.clone(),
    })
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    metrics::inc_requests("/health");

    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
    })
}

/// Version handler - reports the configured version string.
pub async fn version(State(state): State<AppState>) -> impl IntoResponse {
    metrics::inc_requests("/version");

    Json(VersionResponse {
        version: state.config.app_version.clone(),
    })
}

/// Metrics handler - renders the Prometheus exposition text.
pub async fn metrics_text(State(state): State<AppState>) -> impl IntoResponse {
    state.metrics.render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_response_serializes_as_healthy() {
        let body = serde_json::to_value(HealthResponse {
            status: "healthy",
            service: SERVICE_NAME,
        })
        .unwrap();

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "devsecops-demo");
    }

    #[test]
    fn root_response_reflects_config_fields() {
        let config = Config::default();
        let body = serde_json::to_value(RootResponse {
            message: "DevSecOps pipeline demo",
            environment: config.app_env.clone(),
            status: "running",
            version: config.app_version.clone(),
        })
        .unwrap();

        assert_eq!(body["environment"], "production");
        assert_eq!(body["version"], "1.0.0");
        assert_eq!(body["status"], "running");
    }
}
