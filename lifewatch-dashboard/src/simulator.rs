// Lifewatch Dashboard - Background simulator
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Background task driving the monitor.
//!
//! The simulator is the only writer of the shared [`Monitor`]. It ticks
//! once on start, then once per interval, until its handle is stopped.

use crate::metrics::record_tick;
use chrono::Utc;
use lifewatch::Monitor;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tokio::time::sleep;
use tracing::{debug, info};

/// Simulator configuration.
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Time between ticks.
    pub tick_interval: Duration,
    /// Random seed for reproducible walks.
    pub seed: Option<u64>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(5),
            seed: None,
        }
    }
}

/// State shared between the simulator task and its handles.
#[derive(Debug, Default)]
pub struct SimulatorState {
    /// Ticks performed by this simulator.
    pub ticks: AtomicU64,
    /// Whether the loop is running.
    pub running: AtomicBool,
    stop_requested: AtomicBool,
    wake: Notify,
}

/// Cloneable control handle for a running simulator.
#[derive(Debug, Clone)]
pub struct SimulatorHandle {
    state: Arc<SimulatorState>,
}

impl SimulatorHandle {
    /// Ask the loop to exit. Takes effect before the next tick.
    pub fn stop(&self) {
        self.state.stop_requested.store(true, Ordering::SeqCst);
        // notify_one stores a permit if the loop is not sleeping yet
        self.state.wake.notify_one();
    }

    pub fn is_running(&self) -> bool {
        self.state.running.load(Ordering::SeqCst)
    }

    pub fn ticks(&self) -> u64 {
        self.state.ticks.load(Ordering::SeqCst)
    }
}

/// Timed driver for [`Monitor::tick`].
pub struct Simulator {
    config: SimulatorConfig,
    monitor: Arc<Monitor>,
    state: Arc<SimulatorState>,
    rng: StdRng,
}

impl Simulator {
    pub fn new(monitor: Arc<Monitor>, config: SimulatorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            config,
            monitor,
            state: Arc::new(SimulatorState::default()),
            rng,
        }
    }

    pub fn handle(&self) -> SimulatorHandle {
        SimulatorHandle {
            state: Arc::clone(&self.state),
        }
    }

    /// Perform one tick and publish its metrics.
    fn step(&mut self) {
        let snapshot = self.monitor.tick(&mut self.rng, Utc::now());
        self.state.ticks.fetch_add(1, Ordering::SeqCst);
        record_tick(&snapshot, self.monitor.history_len());

        debug!(
            tick = snapshot.tick,
            temperature = snapshot.temperature,
            gas = snapshot.gas,
            sound = snapshot.sound,
            status = %snapshot.status,
            "Tick"
        );
    }

    fn stop_requested(&self) -> bool {
        self.state.stop_requested.load(Ordering::SeqCst)
    }

    /// Run until stopped.
    pub async fn run(mut self) {
        self.state.running.store(true, Ordering::SeqCst);
        info!(
            "Starting simulator: interval={:?}, seeded={}",
            self.config.tick_interval,
            self.config.seed.is_some()
        );

        loop {
            if self.stop_requested() {
                break;
            }

            self.step();

            tokio::select! {
                _ = sleep(self.config.tick_interval) => {}
                _ = self.state.wake.notified() => {}
            }
        }

        self.state.running.store(false, Ordering::SeqCst);
        info!(
            "Simulator stopped after {} ticks",
            self.state.ticks.load(Ordering::SeqCst)
        );
    }
}
