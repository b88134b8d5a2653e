// Lifewatch - Simulated vital-sign monitor
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Status classification module
//!
//! Maps a (temperature, gas, sound) triple to a [`Status`] using two
//! ordered threshold tiers. The first tier that matches wins; all
//! comparisons are strict.

use serde::Serialize;

/// Classified status of the monitored subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// No threshold crossed
    #[default]
    Live,
    /// Warning tier crossed
    Uncertain,
    /// Critical tier crossed
    Deceased,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Live => "live",
            Status::Uncertain => "uncertain",
            Status::Deceased => "deceased",
        }
    }

    /// Numeric severity (0 = live, 1 = uncertain, 2 = deceased).
    pub fn level(&self) -> u8 {
        match self {
            Status::Live => 0,
            Status::Uncertain => 1,
            Status::Deceased => 2,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tier of thresholds. A reading trips the tier when any channel
/// crosses its limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdTier {
    /// Trips when temperature is strictly below this value
    pub temperature_below: f64,
    /// Trips when gas is strictly above this value
    pub gas_above: i32,
    /// Trips when sound is strictly below this value
    pub sound_below: i32,
}

impl ThresholdTier {
    pub fn new(temperature_below: f64, gas_above: i32, sound_below: i32) -> Self {
        Self {
            temperature_below,
            gas_above,
            sound_below,
        }
    }

    /// Check whether a reading trips this tier
    pub fn is_tripped(&self, temperature: f64, gas: i32, sound: i32) -> bool {
        temperature < self.temperature_below || gas > self.gas_above || sound < self.sound_below
    }
}

/// Classifier thresholds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Tier mapped to [`Status::Deceased`]
    pub deceased: ThresholdTier,
    /// Tier mapped to [`Status::Uncertain`]
    pub uncertain: ThresholdTier,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            deceased: ThresholdTier::new(33.0, 250, 30),
            uncertain: ThresholdTier::new(34.0, 200, 35),
        }
    }
}

/// Threshold classifier
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    thresholds: Thresholds,
}

impl Classifier {
    /// Create a classifier with the default thresholds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classifier with custom thresholds
    pub fn with_thresholds(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// Classify a reading, most severe tier first
    pub fn classify(&self, temperature: f64, gas: i32, sound: i32) -> Status {
        if self.thresholds.deceased.is_tripped(temperature, gas, sound) {
            Status::Deceased
        } else if self.thresholds.uncertain.is_tripped(temperature, gas, sound) {
            Status::Uncertain
        } else {
            Status::Live
        }
    }
}

/// Classify with the default thresholds.
pub fn classify(temperature: f64, gas: i32, sound: i32) -> Status {
    Classifier::default().classify(temperature, gas, sound)
}
