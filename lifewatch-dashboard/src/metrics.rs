// Lifewatch Dashboard - Prometheus metrics definitions
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Prometheus metrics for the simulated monitor.
//!
//! Gauges mirror the latest reading; counters track ticks and control
//! requests.

use lazy_static::lazy_static;
use lifewatch::{ControlAck, HistorySnapshot};
use prometheus::{
    register_counter_vec, register_gauge, register_int_counter, CounterVec, Encoder, Gauge,
    IntCounter, TextEncoder,
};

lazy_static! {
    // ============================================================
    // Reading Metrics
    // ============================================================

    /// Latest temperature in °C.
    pub static ref TEMPERATURE_CELSIUS: Gauge = register_gauge!(
        "lifewatch_temperature_celsius",
        "Latest simulated temperature in degrees Celsius"
    ).unwrap();

    /// Latest gas concentration in ppm.
    pub static ref GAS_PPM: Gauge = register_gauge!(
        "lifewatch_gas_ppm",
        "Latest simulated gas concentration in ppm"
    ).unwrap();

    /// Latest sound level in dB.
    pub static ref SOUND_DB: Gauge = register_gauge!(
        "lifewatch_sound_db",
        "Latest simulated sound level in dB"
    ).unwrap();

    /// Status level.
    /// Values: 0 = live, 1 = uncertain, 2 = deceased
    pub static ref STATUS_LEVEL: Gauge = register_gauge!(
        "lifewatch_status_level",
        "Classified status (0=live, 1=uncertain, 2=deceased)"
    ).unwrap();

    pub static ref HISTORY_ENTRIES: Gauge = register_gauge!(
        "lifewatch_history_entries",
        "Number of retained history snapshots"
    ).unwrap();

    // ============================================================
    // Counters
    // ============================================================

    pub static ref TICKS_TOTAL: IntCounter = register_int_counter!(
        "lifewatch_ticks_total",
        "Total simulation ticks"
    ).unwrap();

    /// Control requests (labeled by action and result).
    pub static ref CONTROL_REQUESTS_TOTAL: CounterVec = register_counter_vec!(
        "lifewatch_control_requests_total",
        "Total control requests",
        &["action", "result"]
    ).unwrap();
}

/// Record a completed tick.
pub fn record_tick(snapshot: &HistorySnapshot, history_len: usize) {
    TEMPERATURE_CELSIUS.set(snapshot.temperature);
    GAS_PPM.set(snapshot.gas as f64);
    SOUND_DB.set(snapshot.sound as f64);
    STATUS_LEVEL.set(snapshot.status.level() as f64);
    HISTORY_ENTRIES.set(history_len as f64);
    TICKS_TOTAL.inc();
}

/// Record a control request. Unknown actions share one label so clients
/// cannot grow the label set.
pub fn record_control(action: &str, ack: &ControlAck) {
    let (action, result) = if ack.is_success() {
        (action, "success")
    } else {
        ("invalid", "error")
    };
    CONTROL_REQUESTS_TOTAL
        .with_label_values(&[action, result])
        .inc();
}

/// Encode all metrics to Prometheus text format.
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
}
