//! # Lifewatch - Simulated vital-sign monitor
//!
//! Simulates three environmental sensor channels around a monitored
//! subject and classifies the subject's status from fixed thresholds.
//!
//! ## Key Features
//!
//! - **Random-walk channels**: temperature, gas and sound move by bounded
//!   steps and stay clamped to their ranges
//! - **Threshold classification**: `live`, `uncertain` or `deceased`,
//!   most severe tier first
//! - **Bounded history**: the last 100 ticks, oldest evicted first
//! - **Shared monitor**: one writer, many readers, no torn snapshots
//!
//! ## Quick Start
//!
//! ```rust
//! use lifewatch::{classify, Monitor, Status};
//! use rand::SeedableRng;
//!
//! assert_eq!(classify(32.5, 150, 50), Status::Deceased);
//! assert_eq!(classify(34.0, 200, 35), Status::Live);
//!
//! let monitor = Monitor::new();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! for _ in 0..3 {
//!     monitor.tick(&mut rng, chrono::Utc::now());
//! }
//!
//! let history = monitor.get_recent_history(10);
//! assert_eq!(history.len(), 3);
//! assert_eq!(history[0].tick, 3);
//! ```
//!
//! ## Modules
//!
//! - [`channel`]: Channel bounds and the reading generator
//! - [`classifier`]: Status classification
//! - [`reading`]: Current reading and history snapshot types
//! - [`history`]: Bounded snapshot log
//! - [`monitor`]: Shared state, tick and query surface
//! - [`control`]: Dashboard control actions

// Modules
pub mod channel;
pub mod classifier;
pub mod config;
pub mod control;
pub mod error;
pub mod history;
pub mod monitor;
pub mod reading;

// Re-exports for convenient access
pub use channel::{Channel, ChannelBounds, GAS_BOUNDS, SOUND_BOUNDS, TEMPERATURE_BOUNDS};
pub use classifier::{classify, Classifier, Status, ThresholdTier, Thresholds};
pub use config::{InitialValues, MonitorConfig};
pub use control::{AckStatus, ControlAck, ControlAction};
pub use error::{LifewatchError, Result};
pub use history::{HistoryLog, DEFAULT_HISTORY_CAPACITY, MAX_HISTORY_CAPACITY};
pub use monitor::{ChartSeries, Monitor};
pub use reading::{format_timestamp, HistorySnapshot, SensorReading, TIMESTAMP_FORMAT};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
