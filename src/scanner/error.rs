// SPDX-FileCopyrightText: 2025 Greenbone AG
//
// SPDX-License-Identifier: GPL-2.0-or-later WITH x11vnc-openssl-exception

use crate::daemon::DaemonError;

#[derive(thiserror::Error, Debug, Clone)]
/// An error occurred while executing the scan
pub enum ExecuteError {
    #[error("daemon failure: {0}")]
    /// The daemon refused or failed a call, the scan cannot go on
    Daemon(#[from] DaemonError),
}

#[derive(thiserror::Error, Debug, Clone)]
/// An error occurred while examining a single host
pub enum HostScanError {
    #[error("scanner tool failure: {0}")]
    /// The underlying scan engine failed
    Tool(String),
    #[error("Connection issue: {0}")]
    /// The host or the engine could not be reached
    Connection(String),
    #[error("Unexpected issue: {0}")]
    /// Anything that does not fit the other variants
    Unexpected(String),
}
