// Lifewatch - Simulated vital-sign monitor
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Shared monitor state.
//!
//! [`Monitor`] owns the current [`SensorReading`] and the [`HistoryLog`]
//! behind a single lock. One writer advances it with [`Monitor::tick`];
//! any number of readers use the query methods, which always return
//! owned copies.
//!
//! ```rust
//! use lifewatch::Monitor;
//! use rand::SeedableRng;
//!
//! let monitor = Monitor::new();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//!
//! let snapshot = monitor.tick(&mut rng, chrono::Utc::now());
//! assert_eq!(snapshot.tick, 1);
//! assert_eq!(monitor.get_recent_history(10).len(), 1);
//! ```

use crate::channel::{
    next_gas, next_sound, next_temperature, perturb_gas, perturb_sound, perturb_temperature,
    Channel,
};
use crate::classifier::Classifier;
use crate::config::MonitorConfig;
use crate::control::{ControlAck, ControlAction};
use crate::error::Result;
use crate::history::HistoryLog;
use crate::reading::{HistorySnapshot, SensorReading};
use chrono::{DateTime, Utc};
use rand::Rng;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Ephemeral per-channel samples around the current reading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub temperature: Vec<f64>,
    pub gas: Vec<i32>,
    pub sound: Vec<i32>,
}

impl ChartSeries {
    /// Number of samples per channel.
    pub fn len(&self) -> usize {
        self.temperature.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temperature.is_empty()
    }

    /// Samples of one channel as floats.
    pub fn values(&self, channel: Channel) -> Vec<f64> {
        match channel {
            Channel::Temperature => self.temperature.clone(),
            Channel::Gas => self.gas.iter().copied().map(f64::from).collect(),
            Channel::Sound => self.sound.iter().copied().map(f64::from).collect(),
        }
    }
}

#[derive(Debug)]
struct MonitorState {
    current: SensorReading,
    history: HistoryLog,
    ticks: u64,
}

/// Simulated subject monitor
#[derive(Debug)]
pub struct Monitor {
    classifier: Classifier,
    state: RwLock<MonitorState>,
}

impl Default for Monitor {
    fn default() -> Self {
        Self::build(MonitorConfig::default(), Utc::now())
    }
}

impl Monitor {
    /// Create a monitor with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a monitor with custom configuration
    pub fn with_config(config: MonitorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, Utc::now()))
    }

    fn build(config: MonitorConfig, started_at: DateTime<Utc>) -> Self {
        let classifier = Classifier::with_thresholds(config.thresholds);
        let initial = config.initial;
        let current = SensorReading {
            temperature: initial.temperature,
            gas: initial.gas,
            sound: initial.sound,
            status: classifier.classify(initial.temperature, initial.gas, initial.sound),
            last_updated: started_at,
        };

        Self {
            classifier,
            state: RwLock::new(MonitorState {
                current,
                history: HistoryLog::with_capacity(config.history_capacity),
                ticks: 0,
            }),
        }
    }

    // `tick` assigns the reading and pushes its snapshot with no fallible
    // step in between, so a poisoned lock still guards consistent state.
    fn read(&self) -> RwLockReadGuard<'_, MonitorState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, MonitorState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Advance the simulation by one tick.
    ///
    /// Draws the next value of every channel from the current one,
    /// classifies the new values and records them at `now`. The reading
    /// and its history entry are published together.
    pub fn tick<R: Rng + ?Sized>(&self, rng: &mut R, now: DateTime<Utc>) -> HistorySnapshot {
        let mut state = self.write();

        let temperature = next_temperature(state.current.temperature, rng);
        let gas = next_gas(state.current.gas, rng);
        let sound = next_sound(state.current.sound, rng);
        let next = SensorReading {
            temperature,
            gas,
            sound,
            status: self.classifier.classify(temperature, gas, sound),
            last_updated: now,
        };

        state.ticks += 1;
        let snapshot = next.snapshot(state.ticks);
        state.current = next;
        let _evicted = state.history.push(snapshot.clone());

        #[cfg(feature = "logging")]
        log::debug!(
            "tick {}: temperature={} gas={} sound={} status={} evicted={}",
            snapshot.tick,
            snapshot.temperature,
            snapshot.gas,
            snapshot.sound,
            snapshot.status,
            _evicted
        );

        snapshot
    }

    /// Latest reading.
    pub fn get_current(&self) -> SensorReading {
        self.read().current.clone()
    }

    /// Last `n` history entries, most recent first.
    pub fn get_recent_history(&self, n: usize) -> Vec<HistorySnapshot> {
        self.read().history.recent(n)
    }

    /// Whole retained history, most recent first.
    pub fn get_full_history(&self) -> Vec<HistorySnapshot> {
        self.read().history.all()
    }

    /// `n` fresh samples per channel scattered around the current reading.
    ///
    /// Samples are for display only and never enter the history.
    pub fn get_chart_series<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> ChartSeries {
        let current = self.get_current();

        ChartSeries {
            temperature: (0..n)
                .map(|_| perturb_temperature(current.temperature, rng))
                .collect(),
            gas: (0..n).map(|_| perturb_gas(current.gas, rng)).collect(),
            sound: (0..n).map(|_| perturb_sound(current.sound, rng)).collect(),
        }
    }

    /// Acknowledge a control action. The simulation is never affected.
    pub fn control(&self, action: &str) -> ControlAck {
        let result = action.parse::<ControlAction>();

        #[cfg(feature = "logging")]
        match &result {
            Ok(action) => log::info!("control action acknowledged: {}", action.as_str()),
            Err(e) => log::warn!("control action rejected: {}", e),
        }

        ControlAck::from(result)
    }

    /// Number of retained history entries.
    pub fn history_len(&self) -> usize {
        self.read().history.len()
    }

    /// Maximum number of retained history entries.
    pub fn history_capacity(&self) -> usize {
        self.read().history.capacity()
    }

    /// Number of ticks since creation.
    pub fn tick_count(&self) -> u64 {
        self.read().ticks
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }
}
