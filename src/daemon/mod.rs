// SPDX-FileCopyrightText: 2025 Greenbone AG
//
// SPDX-License-Identifier: GPL-2.0-or-later WITH x11vnc-openssl-exception

//! Defines the interfaces of the scan orchestration daemon the wrapper is
//! plugged into.
//!
//! The daemon owns the scan table. It parses client requests, stores scan
//! parameters and hands out a scan ID. The wrapper only consumes these
//! interfaces: it reads the parameters of a scan, polls the status the
//! daemon tracks for it and pushes findings and progress back.

mod error;
mod inmemory;

pub use error::DaemonError;
pub use inmemory::InMemoryDaemon;

use async_trait::async_trait;

use crate::models::{Credential, Finding, Host, ProgressUpdate, ScanStatus, VT};

/// Read access to the parameters of a stored scan.
#[async_trait]
pub trait ScanCollection: Send + Sync {
    /// Retrieves the list of hosts to scan.
    async fn host_list(&self, scan_id: &str) -> Result<Vec<Host>, DaemonError>;

    /// Retrieves the port specification of a scan.
    async fn ports(&self, scan_id: &str) -> Result<String, DaemonError>;

    /// Retrieves the list of hosts that must not be scanned.
    async fn exclude_hosts(&self, scan_id: &str) -> Result<Vec<Host>, DaemonError>;

    /// Retrieves the credentials to use when accessing services on a host.
    async fn credentials(&self, scan_id: &str) -> Result<Vec<Credential>, DaemonError>;

    /// Retrieves the VTs selected for a scan.
    async fn vts(&self, scan_id: &str) -> Result<Vec<VT>, DaemonError>;
}

/// Access to the status the daemon tracks for a scan.
///
/// A client stopping a scan or the daemon giving up on it is only
/// visible to the wrapper through this trait. The executor reads it
/// once per host.
#[async_trait]
pub trait StatusFetcher: Send + Sync {
    async fn scan_status(&self, scan_id: &str) -> Result<ScanStatus, DaemonError>;
}

/// Sink for host progress reported during a scan.
#[async_trait]
pub trait ProgressSink: Send + Sync {
    /// Announces the total amount of hosts that will be scanned. Called
    /// once before the first host is processed.
    async fn set_total_hosts(&self, scan_id: &str, count: u64) -> Result<(), DaemonError>;

    /// Announces the amount of hosts that were found dead before scanning
    /// started. Called once before the first host is processed.
    async fn set_dead_hosts(&self, scan_id: &str, count: u64) -> Result<(), DaemonError>;

    /// Updates the progress of the given hosts.
    async fn update_host_progress(
        &self,
        scan_id: &str,
        progress: ProgressUpdate,
    ) -> Result<(), DaemonError>;

    /// Marks the given hosts as completely scanned.
    async fn mark_hosts_done(&self, scan_id: &str, hosts: Vec<Host>) -> Result<(), DaemonError>;
}

/// Sink for the findings produced while scanning a host.
#[async_trait]
pub trait ResultSink: Send + Sync {
    async fn submit_findings(
        &self,
        scan_id: &str,
        findings: Vec<Finding>,
    ) -> Result<(), DaemonError>;
}

/// Releases resources the daemon holds for a scan that was interrupted.
#[async_trait]
pub trait ScanCleaner: Send + Sync {
    async fn cleanup_scan(&self, scan_id: &str) -> Result<(), DaemonError>;
}

/// Combines all daemon traits the wrapper consumes.
pub trait HostDaemon:
    ScanCollection + StatusFetcher + ProgressSink + ResultSink + ScanCleaner
{
}

impl<T> HostDaemon for T where
    T: ScanCollection + StatusFetcher + ProgressSink + ResultSink + ScanCleaner
{
}
