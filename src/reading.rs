// Lifewatch - Simulated vital-sign monitor
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Current reading and history snapshot types.

use crate::channel::{GAS_BOUNDS, SOUND_BOUNDS, TEMPERATURE_BOUNDS};
use crate::classifier::Status;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

/// Wall-clock format used in JSON payloads and the dashboard.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a timestamp the way the API exposes it.
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

fn serialize_timestamp<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&at.format(TIMESTAMP_FORMAT))
}

/// Latest state of all channels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorReading {
    /// Temperature in °C
    pub temperature: f64,
    /// Gas concentration in ppm
    pub gas: i32,
    /// Sound level in dB
    pub sound: i32,
    /// Status derived from the three channels
    pub status: Status,
    /// Time of the last tick
    #[serde(serialize_with = "serialize_timestamp")]
    pub last_updated: DateTime<Utc>,
}

impl SensorReading {
    /// Starting point of the simulation.
    pub fn initial(at: DateTime<Utc>) -> Self {
        Self {
            temperature: 36.5,
            gas: 120,
            sound: 45,
            status: Status::Live,
            last_updated: at,
        }
    }

    /// Check that every channel lies within its bounds.
    pub fn in_bounds(&self) -> bool {
        TEMPERATURE_BOUNDS.contains(self.temperature)
            && GAS_BOUNDS.contains(self.gas)
            && SOUND_BOUNDS.contains(self.sound)
    }

    /// Freeze this reading into a history entry.
    pub fn snapshot(&self, tick: u64) -> HistorySnapshot {
        HistorySnapshot {
            tick,
            timestamp: self.last_updated,
            temperature: self.temperature,
            gas: self.gas,
            sound: self.sound,
            status: self.status,
        }
    }
}

/// Immutable record of one tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistorySnapshot {
    /// 1-based tick sequence number
    pub tick: u64,
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    pub temperature: f64,
    pub gas: i32,
    pub sound: i32,
    pub status: Status,
}
