//! Error types for Lifewatch
//!
//! The simulation itself is total; errors only surface at the edges
//! (control requests and configuration).

use thiserror::Error;

/// Result type alias for Lifewatch operations
pub type Result<T> = std::result::Result<T, LifewatchError>;

/// Main error type for Lifewatch operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifewatchError {
    /// Control action not recognized (or request body unreadable)
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
