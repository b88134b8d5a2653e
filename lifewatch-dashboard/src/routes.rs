// Lifewatch Dashboard - HTTP routes
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Router and request handlers.
//!
//! Handlers only read the shared monitor; the simulator is its sole
//! writer.

use crate::api::{extract_action, ChartResponse, HistoryResponse, CHART_POINTS};
use crate::dashboard::{render_dashboard, DASHBOARD_HISTORY_ROWS};
use crate::metrics::{encode_metrics, record_control};
use crate::simulator::SimulatorHandle;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use lifewatch::{ControlAck, Monitor};
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

/// Application state shared across handlers.
pub struct AppState {
    pub monitor: Arc<Monitor>,
    pub simulator: SimulatorHandle,
    pub tick_interval: Duration,
    pub start_time: Instant,
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(dashboard_handler))
        .route("/api/data", get(data_handler))
        .route("/api/history", get(history_handler))
        .route("/api/control", post(control_handler))
        .route("/metrics", get(metrics_handler))
        .route("/health", get(health_handler))
        .route("/status", get(status_handler))
        .with_state(state)
}

/// Dashboard page.
async fn dashboard_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    let reading = state.monitor.get_current();
    let history = state.monitor.get_recent_history(DASHBOARD_HISTORY_ROWS);
    Html(render_dashboard(&reading, &history))
}

/// Chart series plus the current reading.
async fn data_handler(State(state): State<Arc<AppState>>) -> Json<ChartResponse> {
    let series = {
        let mut rng = rand::thread_rng();
        state.monitor.get_chart_series(CHART_POINTS, &mut rng)
    };
    Json(ChartResponse::new(series, state.monitor.get_current()))
}

/// Full history, most recent first.
async fn history_handler(State(state): State<Arc<AppState>>) -> Json<HistoryResponse> {
    Json(HistoryResponse {
        history: state.monitor.get_full_history(),
    })
}

/// Control actions. Always answers 200 with an acknowledgement.
async fn control_handler(State(state): State<Arc<AppState>>, body: Bytes) -> Json<ControlAck> {
    let ack = match extract_action(&body) {
        Ok(action) => {
            let ack = state.monitor.control(&action);
            if ack.is_success() {
                info!(action = %action, "Control action acknowledged");
            } else {
                warn!(action = %action, "Unknown control action");
            }
            record_control(&action, &ack);
            ack
        }
        Err(e) => {
            warn!("Rejected control request: {}", e);
            let ack = ControlAck::invalid();
            record_control("", &ack);
            ack
        }
    };
    Json(ack)
}

/// Metrics handler - returns Prometheus text format.
async fn metrics_handler() -> impl IntoResponse {
    match encode_metrics() {
        Ok(metrics) => (
            StatusCode::OK,
            [("Content-Type", "text/plain; charset=utf-8")],
            metrics,
        ),
        Err(e) => {
            error!("Failed to encode metrics: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [("Content-Type", "text/plain; charset=utf-8")],
                String::from("metrics unavailable"),
            )
        }
    }
}

/// Health check handler.
async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Status information response.
#[derive(Serialize)]
pub struct StatusResponse {
    version: String,
    uptime_secs: u64,
    running: bool,
    ticks: u64,
    history_len: usize,
    tick_interval_secs: f64,
}

/// Status handler - returns JSON status information.
async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        running: state.simulator.is_running(),
        ticks: state.simulator.ticks(),
        history_len: state.monitor.history_len(),
        tick_interval_secs: state.tick_interval.as_secs_f64(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulator::{Simulator, SimulatorConfig};
    use approx::assert_relative_eq;
    use chrono::{TimeZone, Utc};
    use lifewatch::AckStatus;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn state_with_ticks(ticks: u64) -> Arc<AppState> {
        let monitor = Arc::new(Monitor::new());
        let mut rng = StdRng::seed_from_u64(10);
        for i in 0..ticks {
            let at = Utc.timestamp_opt(1_700_000_000 + i as i64 * 5, 0).unwrap();
            monitor.tick(&mut rng, at);
        }

        let simulator = Simulator::new(Arc::clone(&monitor), SimulatorConfig::default());
        Arc::new(AppState {
            monitor,
            simulator: simulator.handle(),
            tick_interval: Duration::from_secs(5),
            start_time: Instant::now(),
        })
    }

    #[tokio::test]
    async fn test_dashboard_shows_ten_entries() {
        let state = state_with_ticks(25);
        let Html(html) = dashboard_handler(State(Arc::clone(&state))).await;

        assert!(html.contains("Lifewatch"));
        let latest = state.monitor.get_recent_history(1);
        assert!(html.contains(&lifewatch::format_timestamp(&latest[0].timestamp)));
        assert_eq!(html.matches("            <tr><td>").count(), 10);
    }

    #[tokio::test]
    async fn test_data_payload() {
        let state = state_with_ticks(3);
        let Json(response) = data_handler(State(Arc::clone(&state))).await;

        assert_eq!(response.labels.len(), 20);
        assert_eq!(response.labels[19], "95 sec");
        assert_eq!(response.datasets.len(), 3);
        assert!(response.datasets.iter().all(|d| d.data.len() == 20));
        assert_eq!(response.sensor_data, state.monitor.get_current());
        // chart samples are never recorded
        assert_eq!(state.monitor.history_len(), 3);
    }

    #[tokio::test]
    async fn test_history_most_recent_first() {
        let state = state_with_ticks(12);
        let Json(response) = history_handler(State(state)).await;

        assert_eq!(response.history.len(), 12);
        let ticks: Vec<u64> = response.history.iter().map(|s| s.tick).collect();
        assert_eq!(ticks, (1..=12).rev().collect::<Vec<u64>>());
    }

    #[tokio::test]
    async fn test_control_actions() {
        let state = state_with_ticks(1);
        let before = state.monitor.get_current();

        for (action, message) in [
            ("start", "Monitoring started"),
            ("stop", "Monitoring stopped"),
            ("reset", "Alerts reset"),
        ] {
            let body = Bytes::from(format!(r#"{{"action": "{}"}}"#, action));
            let Json(ack) = control_handler(State(Arc::clone(&state)), body).await;
            assert_eq!(ack.status, AckStatus::Success);
            assert_eq!(ack.message, message);
        }

        let body = Bytes::from_static(br#"{"action": "fly"}"#);
        let Json(ack) = control_handler(State(Arc::clone(&state)), body).await;
        assert_eq!(ack.status, AckStatus::Error);
        assert_eq!(ack.message, "Invalid action");

        assert_eq!(state.monitor.get_current(), before);
        assert_eq!(state.monitor.tick_count(), 1);
    }

    #[tokio::test]
    async fn test_control_malformed_body() {
        let state = state_with_ticks(0);

        let bodies: [&[u8]; 3] = [b"", b"{", b"{}"];
        for body in bodies {
            let Json(ack) =
                control_handler(State(Arc::clone(&state)), Bytes::copy_from_slice(body)).await;
            assert_eq!(ack, ControlAck::invalid());
        }
    }

    #[tokio::test]
    async fn test_metrics_and_status() {
        let state = state_with_ticks(2);

        let response = metrics_handler().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let Json(status) = status_handler(State(Arc::clone(&state))).await;
        assert_eq!(status.history_len, 2);
        assert!(!status.running);
        assert_eq!(status.ticks, 0);
        assert_relative_eq!(status.tick_interval_secs, 5.0);
    }
}
