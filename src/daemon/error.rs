// SPDX-FileCopyrightText: 2025 Greenbone AG
//
// SPDX-License-Identifier: GPL-2.0-or-later WITH x11vnc-openssl-exception

use thiserror::Error;

/// Errors reported by a daemon when the wrapper retrieves scan data or
/// delivers results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DaemonError {
    /// Daemon and wrapper disagree on the state of a scan
    #[error("Unexpected issue: {0}")]
    Unexpected(String),
    /// The daemon cannot be reached
    #[error("Connection issue: {0}")]
    Connection(String),
    /// The daemon has no scan with the given ID
    #[error("Scan not found: {0}")]
    ScanNotFound(String),
}
