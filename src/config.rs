// Lifewatch - Simulated vital-sign monitor
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Configuration types for the monitor

use crate::classifier::Thresholds;
use crate::error::{LifewatchError, Result};
use crate::history::{DEFAULT_HISTORY_CAPACITY, MAX_HISTORY_CAPACITY};

/// Starting channel values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialValues {
    pub temperature: f64,
    pub gas: i32,
    pub sound: i32,
}

impl Default for InitialValues {
    fn default() -> Self {
        Self {
            temperature: 36.5,
            gas: 120,
            sound: 45,
        }
    }
}

/// Monitor configuration
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Maximum number of retained history snapshots (default: 100)
    pub history_capacity: usize,

    /// Channel values before the first tick
    pub initial: InitialValues,

    /// Classifier thresholds
    pub thresholds: Thresholds,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            initial: InitialValues::default(),
            thresholds: Thresholds::default(),
        }
    }
}

impl MonitorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set history capacity
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Set starting values
    pub fn with_initial(mut self, initial: InitialValues) -> Self {
        self.initial = initial;
        self
    }

    /// Set classifier thresholds
    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Reject configurations the monitor cannot honor.
    pub fn validate(&self) -> Result<()> {
        use crate::channel::{GAS_BOUNDS, SOUND_BOUNDS, TEMPERATURE_BOUNDS};

        if self.history_capacity == 0 {
            return Err(LifewatchError::InvalidConfig(
                "history capacity must be greater than zero".to_string(),
            ));
        }
        if self.history_capacity > MAX_HISTORY_CAPACITY {
            return Err(LifewatchError::InvalidConfig(format!(
                "history capacity {} exceeds {}",
                self.history_capacity, MAX_HISTORY_CAPACITY
            )));
        }
        if !TEMPERATURE_BOUNDS.contains(self.initial.temperature) {
            return Err(LifewatchError::InvalidConfig(format!(
                "initial temperature {} outside [{}, {}]",
                self.initial.temperature, TEMPERATURE_BOUNDS.min, TEMPERATURE_BOUNDS.max
            )));
        }
        if !GAS_BOUNDS.contains(self.initial.gas) {
            return Err(LifewatchError::InvalidConfig(format!(
                "initial gas {} outside [{}, {}]",
                self.initial.gas, GAS_BOUNDS.min, GAS_BOUNDS.max
            )));
        }
        if !SOUND_BOUNDS.contains(self.initial.sound) {
            return Err(LifewatchError::InvalidConfig(format!(
                "initial sound {} outside [{}, {}]",
                self.initial.sound, SOUND_BOUNDS.min, SOUND_BOUNDS.max
            )));
        }
        Ok(())
    }
}
