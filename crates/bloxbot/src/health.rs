//! Liveness HTTP endpoint.
//!
//! A minimal keep-alive surface for hosting platforms that probe the
//! process. Failure here is logged but never takes the bot down.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use std::time::Instant;
use tracing::{error, info};

/// Health check response body.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    status: &'static str,
    uptime_secs: u64,
}

#[derive(Clone)]
struct AppState {
    start_time: Instant,
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

fn router() -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(AppState {
            start_time: Instant::now(),
        })
}

/// Bind and serve the liveness endpoint on the given port.
pub async fn serve(port: u16) {
    let listener = match tokio::net::TcpListener::bind(("0.0.0.0", port)).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(port, error = %e, "Failed to bind liveness endpoint");
            return;
        }
    };
    info!(port, "Liveness endpoint listening");
    if let Err(e) = axum::serve(listener, router()).await {
        error!(error = %e, "Liveness endpoint terminated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn health_route_reports_ok() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
    }
}
