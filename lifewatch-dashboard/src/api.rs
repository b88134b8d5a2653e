// Lifewatch Dashboard - JSON payloads
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Response and request shapes of the JSON API.

use lifewatch::{Channel, ChartSeries, HistorySnapshot, LifewatchError, SensorReading};
use serde::{Deserialize, Serialize};

/// Samples per chart series.
pub const CHART_POINTS: usize = 20;

/// Seconds between chart labels.
pub const CHART_LABEL_STEP_SECS: usize = 5;

/// One Chart.js line dataset.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: &'static str,
    pub background_color: &'static str,
    pub tension: f64,
    pub fill: bool,
}

impl Dataset {
    fn line(channel: Channel, data: Vec<f64>) -> Self {
        let (border_color, background_color) = match channel {
            Channel::Temperature => ("#ff9a9e", "rgba(255, 154, 158, 0.1)"),
            Channel::Gas => ("#a18cd1", "rgba(161, 140, 209, 0.1)"),
            Channel::Sound => ("#84fab0", "rgba(132, 250, 176, 0.1)"),
        };
        Self {
            label: channel.label(),
            data,
            border_color,
            background_color,
            tension: 0.4,
            fill: true,
        }
    }
}

/// `GET /api/data` response.
#[derive(Debug, Clone, Serialize)]
pub struct ChartResponse {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub sensor_data: SensorReading,
}

impl ChartResponse {
    pub fn new(series: ChartSeries, sensor_data: SensorReading) -> Self {
        let labels = (0..series.len())
            .map(|i| format!("{} sec", i * CHART_LABEL_STEP_SECS))
            .collect();

        let datasets = Channel::ALL
            .iter()
            .map(|&channel| Dataset::line(channel, series.values(channel)))
            .collect();

        Self {
            labels,
            datasets,
            sensor_data,
        }
    }
}

/// `GET /api/history` response.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryResponse {
    pub history: Vec<HistorySnapshot>,
}

/// `POST /api/control` request body.
#[derive(Debug, Clone, Deserialize)]
pub struct ControlRequest {
    pub action: Option<String>,
}

/// Pull the action name out of a control request body. Anything
/// unreadable is an invalid action rather than a transport error.
pub fn extract_action(body: &[u8]) -> Result<String, LifewatchError> {
    let request: ControlRequest = serde_json::from_slice(body)
        .map_err(|e| LifewatchError::InvalidAction(format!("malformed body: {}", e)))?;

    request
        .action
        .ok_or_else(|| LifewatchError::InvalidAction("missing action".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn series() -> ChartSeries {
        ChartSeries {
            temperature: vec![36.4; CHART_POINTS],
            gas: vec![121; CHART_POINTS],
            sound: vec![44; CHART_POINTS],
        }
    }

    #[test]
    fn test_chart_labels() {
        let response = ChartResponse::new(series(), SensorReading::initial(Utc::now()));
        assert_eq!(response.labels.len(), 20);
        assert_eq!(response.labels[0], "0 sec");
        assert_eq!(response.labels[1], "5 sec");
        assert_eq!(response.labels[19], "95 sec");
    }

    #[test]
    fn test_chart_json_shape() {
        let response = ChartResponse::new(series(), SensorReading::initial(Utc::now()));
        let json = serde_json::to_value(&response).unwrap();

        let datasets = json["datasets"].as_array().unwrap();
        assert_eq!(datasets.len(), 3);
        assert_eq!(datasets[0]["label"], "Temperature (°C)");
        assert_eq!(datasets[0]["borderColor"], "#ff9a9e");
        assert_eq!(datasets[1]["backgroundColor"], "rgba(161, 140, 209, 0.1)");
        assert_eq!(datasets[2]["label"], "Sound Level (dB)");
        assert_eq!(datasets[2]["tension"], 0.4);
        assert_eq!(datasets[2]["fill"], true);
        assert_eq!(datasets[1]["data"].as_array().unwrap().len(), 20);
        assert_eq!(datasets[1]["data"][0], 121.0);
        assert_eq!(json["sensor_data"]["status"], "live");
    }

    #[test]
    fn test_extract_action() {
        assert_eq!(
            extract_action(br#"{"action": "start"}"#),
            Ok("start".to_string())
        );
        assert_eq!(
            extract_action(br#"{"action": "reset", "extra": 1}"#),
            Ok("reset".to_string())
        );
        // validity is decided by the monitor
        assert_eq!(
            extract_action(br#"{"action": "fly"}"#),
            Ok("fly".to_string())
        );
    }

    #[test]
    fn test_extract_action_rejects_bad_bodies() {
        let bodies: [&[u8]; 6] = [
            b"",
            b"not json",
            br#"{}"#,
            br#"{"action": null}"#,
            br#"{"action": 3}"#,
            br#"[1, 2]"#,
        ];
        for body in bodies {
            assert!(
                matches!(extract_action(body), Err(LifewatchError::InvalidAction(_))),
                "{:?}",
                String::from_utf8_lossy(body)
            );
        }
    }
}
