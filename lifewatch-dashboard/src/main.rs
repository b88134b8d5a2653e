// Lifewatch Dashboard - Web dashboard for the simulated monitor
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! # Lifewatch Dashboard
//!
//! Serves the Lifewatch dashboard and JSON API while a background task
//! advances the simulated sensors.
//!
//! ## Usage
//!
//! ```bash
//! # Defaults: port 5000, one tick every 5 seconds
//! lifewatch-dashboard
//!
//! # Faster ticks, reproducible walk
//! lifewatch-dashboard --interval-secs 1 --seed 42 --port 8080
//! ```

mod api;
mod dashboard;
mod error;
mod metrics;
mod routes;
mod simulator;

use clap::Parser;
use error::DashboardError;
use lifewatch::{Monitor, MonitorConfig};
use routes::{router, AppState};
use simulator::{Simulator, SimulatorConfig};
use std::net::{IpAddr, SocketAddr};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

/// Lifewatch dashboard server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "5000")]
    port: u16,

    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Seconds between simulation ticks
    #[arg(short, long, default_value = "5")]
    interval_secs: u64,

    /// Number of history snapshots to retain
    #[arg(long, default_value = "100")]
    history_capacity: usize,

    /// Random seed for a reproducible simulation
    #[arg(long)]
    seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn listen_addr(&self) -> Result<SocketAddr, DashboardError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| DashboardError::Address(self.host.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    fn tick_interval(&self) -> Result<Duration, DashboardError> {
        if self.interval_secs == 0 {
            return Err(lifewatch::LifewatchError::InvalidConfig(
                "tick interval must be at least one second".to_string(),
            )
            .into());
        }
        Ok(Duration::from_secs(self.interval_secs))
    }

    fn monitor(&self) -> Result<Monitor, DashboardError> {
        let config = MonitorConfig::new().with_history_capacity(self.history_capacity);
        Ok(Monitor::with_config(config)?)
    }
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = match log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };
        EnvFilter::from_default_env().add_directive(level.into())
    });

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        // Without a signal handler, keep serving until killed.
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

async fn run(args: Args) -> Result<(), DashboardError> {
    let addr = args.listen_addr()?;
    let tick_interval = args.tick_interval()?;

    let monitor = Arc::new(args.monitor()?);

    let simulator = Simulator::new(
        Arc::clone(&monitor),
        SimulatorConfig {
            tick_interval,
            seed: args.seed,
        },
    );
    let handle = simulator.handle();
    let simulation = tokio::spawn(simulator.run());

    let state = Arc::new(AppState {
        monitor,
        simulator: handle.clone(),
        tick_interval,
        start_time: Instant::now(),
    });
    let app = router(state);

    let listener = TcpListener::bind(addr).await?;
    info!("Starting server on http://{}", addr);
    info!("Dashboard: http://{}/", addr);
    info!("Metrics endpoint: http://{}/metrics", addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    handle.stop();
    if let Err(e) = simulation.await {
        error!("Simulator task failed: {}", e);
    }

    served?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);

    info!("Lifewatch Dashboard v{}", env!("CARGO_PKG_VERSION"));

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = Args::try_parse_from(["lifewatch-dashboard"]).unwrap();
        assert_eq!(args.interval_secs, 5);
        assert_eq!(args.history_capacity, 100);
        assert!(args.seed.is_none());
        assert_eq!(args.tick_interval().unwrap(), Duration::from_secs(5));
        assert!(args.listen_addr().is_ok());
    }

    #[test]
    fn test_invalid_args() {
        let args = Args::try_parse_from(["lifewatch-dashboard", "--interval-secs", "0"]).unwrap();
        assert!(matches!(
            args.tick_interval(),
            Err(DashboardError::Config(_))
        ));

        let args = Args::try_parse_from(["lifewatch-dashboard", "--host", "not-an-ip"]).unwrap();
        assert!(matches!(args.listen_addr(), Err(DashboardError::Address(_))));

        let args = Args::try_parse_from([
            "lifewatch-dashboard",
            "--history-capacity",
            "18446744073709551615",
        ])
        .unwrap();
        assert!(matches!(args.monitor(), Err(DashboardError::Config(_))));
    }

    #[test]
    fn test_explicit_args() {
        let args = Args::try_parse_from([
            "lifewatch-dashboard",
            "--port",
            "8080",
            "--host",
            "127.0.0.1",
            "--seed",
            "7",
        ])
        .unwrap();
        assert_eq!(args.listen_addr().unwrap().to_string(), "127.0.0.1:8080");
        assert_eq!(args.seed, Some(7));
    }
}
