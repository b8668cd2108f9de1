// SPDX-FileCopyrightText: 2025 Greenbone AG
//
// SPDX-License-Identifier: GPL-2.0-or-later WITH x11vnc-openssl-exception

use std::{fmt::Display, str::FromStr};

/// Enum of the possible statuses of a scan as tracked by the daemon
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanStatus {
    /// The scan is being executed
    #[default]
    Running,
    /// The scan has been stopped by a client
    Stopped,
    /// The scan was aborted due to an internal error
    Interrupted,
    /// The scan has successfully finished
    Finished,
}

impl ScanStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }
}

impl FromStr for ScanStatus {
    type Err = ();

    fn from_str(status: &str) -> Result<ScanStatus, ()> {
        match status {
            "running" => Ok(ScanStatus::Running),
            "stopped" => Ok(ScanStatus::Stopped),
            "interrupted" => Ok(ScanStatus::Interrupted),
            "finished" => Ok(ScanStatus::Finished),
            _ => Err(()),
        }
    }
}

impl Display for ScanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Running => write!(f, "running"),
            Self::Stopped => write!(f, "stopped"),
            Self::Interrupted => write!(f, "interrupted"),
            Self::Finished => write!(f, "finished"),
        }
    }
}
