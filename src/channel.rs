// Lifewatch - Simulated vital-sign monitor
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Sensor channels and the random-walk reading generator.
//!
//! Each channel moves by a bounded uniform step from its previous value
//! and is then clamped into its fixed range:
//!
//! | Channel     | Range       | Step          |
//! |-------------|-------------|---------------|
//! | temperature | 32.0 - 38.0 | U[-0.2, 0.2]  |
//! | gas         | 100 - 300   | U{-5, .., 5}  |
//! | sound       | 20 - 80     | U{-3, .., 3}  |
//!
//! Temperature is rounded to one decimal place after clamping.

use rand::Rng;

/// Inclusive `[min, max]` range of a channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelBounds<T> {
    pub min: T,
    pub max: T,
}

impl<T> ChannelBounds<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T: PartialOrd + Copy> ChannelBounds<T> {
    /// Constrain `value` into the range.
    pub fn clamp(&self, value: T) -> T {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Check whether `value` lies inside the range.
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Temperature range in degrees Celsius.
pub const TEMPERATURE_BOUNDS: ChannelBounds<f64> = ChannelBounds::new(32.0, 38.0);
/// Gas concentration range in ppm.
pub const GAS_BOUNDS: ChannelBounds<i32> = ChannelBounds::new(100, 300);
/// Sound level range in dB.
pub const SOUND_BOUNDS: ChannelBounds<i32> = ChannelBounds::new(20, 80);

/// Maximum temperature change per step.
pub const TEMPERATURE_STEP: f64 = 0.2;
/// Maximum gas change per step.
pub const GAS_STEP: i32 = 5;
/// Maximum sound change per step.
pub const SOUND_STEP: i32 = 3;

/// One of the three measured quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Temperature,
    Gas,
    Sound,
}

impl Channel {
    /// All channels, in display order.
    pub const ALL: [Channel; 3] = [Channel::Temperature, Channel::Gas, Channel::Sound];

    /// Field name used in JSON payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Temperature => "temperature",
            Channel::Gas => "gas",
            Channel::Sound => "sound",
        }
    }

    /// Unit of measurement.
    pub fn unit(&self) -> &'static str {
        match self {
            Channel::Temperature => "°C",
            Channel::Gas => "ppm",
            Channel::Sound => "dB",
        }
    }

    /// Human-readable label for charts.
    pub fn label(&self) -> String {
        let name = match self {
            Channel::Temperature => "Temperature",
            Channel::Gas => "Gas Level",
            Channel::Sound => "Sound Level",
        };
        format!("{} ({})", name, self.unit())
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Round to one decimal place.
pub fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Perturb a temperature and clamp it, without rounding.
pub fn perturb_temperature<R: Rng + ?Sized>(base: f64, rng: &mut R) -> f64 {
    let step = rng.gen_range(-TEMPERATURE_STEP..=TEMPERATURE_STEP);
    TEMPERATURE_BOUNDS.clamp(base + step)
}

/// Perturb a gas reading and clamp it.
pub fn perturb_gas<R: Rng + ?Sized>(base: i32, rng: &mut R) -> i32 {
    let step = rng.gen_range(-GAS_STEP..=GAS_STEP);
    GAS_BOUNDS.clamp(base.saturating_add(step))
}

/// Perturb a sound reading and clamp it.
pub fn perturb_sound<R: Rng + ?Sized>(base: i32, rng: &mut R) -> i32 {
    let step = rng.gen_range(-SOUND_STEP..=SOUND_STEP);
    SOUND_BOUNDS.clamp(base.saturating_add(step))
}

/// Next temperature of the random walk.
pub fn next_temperature<R: Rng + ?Sized>(previous: f64, rng: &mut R) -> f64 {
    // Bounds are integral, rounding cannot leave the range.
    round_tenths(perturb_temperature(previous, rng))
}

/// Next gas reading of the random walk.
pub fn next_gas<R: Rng + ?Sized>(previous: i32, rng: &mut R) -> i32 {
    perturb_gas(previous, rng)
}

/// Next sound reading of the random walk.
pub fn next_sound<R: Rng + ?Sized>(previous: i32, rng: &mut R) -> i32 {
    perturb_sound(previous, rng)
}
