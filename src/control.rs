// Lifewatch - Simulated vital-sign monitor
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Dashboard control actions.
//!
//! Start, stop and reset are acknowledged but do not touch the
//! simulation; the monitor keeps ticking regardless.

use crate::error::{LifewatchError, Result};
use serde::Serialize;
use std::str::FromStr;

/// Recognized control actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Start,
    Stop,
    Reset,
}

impl ControlAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlAction::Start => "start",
            ControlAction::Stop => "stop",
            ControlAction::Reset => "reset",
        }
    }

    /// Acknowledgement message for this action.
    pub fn message(&self) -> &'static str {
        match self {
            ControlAction::Start => "Monitoring started",
            ControlAction::Stop => "Monitoring stopped",
            ControlAction::Reset => "Alerts reset",
        }
    }
}

impl FromStr for ControlAction {
    type Err = LifewatchError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "start" => Ok(ControlAction::Start),
            "stop" => Ok(ControlAction::Stop),
            "reset" => Ok(ControlAction::Reset),
            other => Err(LifewatchError::InvalidAction(other.to_string())),
        }
    }
}

/// Outcome reported back to the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AckStatus {
    Success,
    Error,
}

/// Response to a control request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlAck {
    pub status: AckStatus,
    pub message: String,
}

impl ControlAck {
    pub fn success(action: ControlAction) -> Self {
        Self {
            status: AckStatus::Success,
            message: action.message().to_string(),
        }
    }

    pub fn invalid() -> Self {
        Self {
            status: AckStatus::Error,
            message: "Invalid action".to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == AckStatus::Success
    }
}

impl From<Result<ControlAction>> for ControlAck {
    fn from(result: Result<ControlAction>) -> Self {
        match result {
            Ok(action) => ControlAck::success(action),
            Err(_) => ControlAck::invalid(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_actions() {
        assert_eq!("start".parse::<ControlAction>(), Ok(ControlAction::Start));
        assert_eq!("stop".parse::<ControlAction>(), Ok(ControlAction::Stop));
        assert_eq!("reset".parse::<ControlAction>(), Ok(ControlAction::Reset));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(matches!(
            "START".parse::<ControlAction>(),
            Err(LifewatchError::InvalidAction(_))
        ));
        assert!("".parse::<ControlAction>().is_err());
    }

    #[test]
    fn test_ack_json() {
        let ack = ControlAck::success(ControlAction::Reset);
        let json = serde_json::to_value(&ack).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["message"], "Alerts reset");

        let json = serde_json::to_value(ControlAck::invalid()).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "Invalid action");
    }

    #[test]
    fn test_ack_from_result() {
        assert!(ControlAck::from("stop".parse::<ControlAction>()).is_success());
        assert!(!ControlAck::from("fly".parse::<ControlAction>()).is_success());
    }
}
