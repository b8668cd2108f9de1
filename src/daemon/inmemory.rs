// SPDX-FileCopyrightText: 2025 Greenbone AG
//
// SPDX-License-Identifier: GPL-2.0-or-later WITH x11vnc-openssl-exception

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{DaemonError, ProgressSink, ResultSink, ScanCleaner, ScanCollection, StatusFetcher};
use crate::models::{
    Credential, Finding, Host, HostInfo, ProgressUpdate, Scan, ScanID, ScanStatus, VT,
};

struct Entry {
    scan: Scan,
    status: ScanStatus,
    host_info: HostInfo,
    findings: Vec<Finding>,
    finished_hosts: Vec<Host>,
    cleanups: usize,
}

/// A daemon that keeps its scan table in memory.
///
/// Serves deployments where wrapper and daemon live in the same process
/// and backs the crate's tests. Nothing survives a restart.
#[derive(Default)]
pub struct InMemoryDaemon {
    scans: RwLock<HashMap<ScanID, Entry>>,
}

impl InMemoryDaemon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a scan and marks it as running.
    ///
    /// When the scan does not carry an ID a fresh one is assigned. Returns
    /// the ID under which the scan is tracked.
    pub async fn add_scan(&self, mut scan: Scan) -> ScanID {
        if scan.scan_id.is_empty() {
            scan.scan_id = uuid::Uuid::new_v4().to_string();
        }
        let id = scan.scan_id.clone();
        let entry = Entry {
            scan,
            status: ScanStatus::Running,
            host_info: HostInfo::default(),
            findings: Vec::new(),
            finished_hosts: Vec::new(),
            cleanups: 0,
        };
        self.scans.write().await.insert(id.clone(), entry);
        id
    }

    /// Overrides the status of a scan, e.g. when a client stops it.
    pub async fn set_status(&self, scan_id: &str, status: ScanStatus) -> Result<(), DaemonError> {
        self.modify(scan_id, |entry| entry.status = status).await
    }

    /// Returns the findings collected for a scan so far.
    pub async fn findings(&self, scan_id: &str) -> Result<Vec<Finding>, DaemonError> {
        self.read(scan_id, |entry| entry.findings.clone()).await
    }

    /// Returns the host information aggregated for a scan so far.
    pub async fn host_info(&self, scan_id: &str) -> Result<HostInfo, DaemonError> {
        self.read(scan_id, |entry| entry.host_info.clone()).await
    }

    /// Returns the hosts that were marked as done.
    pub async fn finished_hosts(&self, scan_id: &str) -> Result<Vec<Host>, DaemonError> {
        self.read(scan_id, |entry| entry.finished_hosts.clone())
            .await
    }

    /// Returns how often a scan was cleaned up.
    pub async fn cleanups(&self, scan_id: &str) -> Result<usize, DaemonError> {
        self.read(scan_id, |entry| entry.cleanups).await
    }

    async fn read<T>(
        &self,
        scan_id: &str,
        f: impl FnOnce(&Entry) -> T + Send,
    ) -> Result<T, DaemonError> {
        let scans = self.scans.read().await;
        scans
            .get(scan_id)
            .map(f)
            .ok_or_else(|| DaemonError::ScanNotFound(scan_id.to_string()))
    }

    async fn modify<T>(
        &self,
        scan_id: &str,
        f: impl FnOnce(&mut Entry) -> T + Send,
    ) -> Result<T, DaemonError> {
        let mut scans = self.scans.write().await;
        scans
            .get_mut(scan_id)
            .map(f)
            .ok_or_else(|| DaemonError::ScanNotFound(scan_id.to_string()))
    }
}

#[async_trait]
impl ScanCollection for InMemoryDaemon {
    async fn host_list(&self, scan_id: &str) -> Result<Vec<Host>, DaemonError> {
        self.read(scan_id, |entry| entry.scan.target.hosts.clone())
            .await
    }

    async fn ports(&self, scan_id: &str) -> Result<String, DaemonError> {
        self.read(scan_id, |entry| entry.scan.target.ports.clone())
            .await
    }

    async fn exclude_hosts(&self, scan_id: &str) -> Result<Vec<Host>, DaemonError> {
        self.read(scan_id, |entry| entry.scan.target.excluded_hosts.clone())
            .await
    }

    async fn credentials(&self, scan_id: &str) -> Result<Vec<Credential>, DaemonError> {
        self.read(scan_id, |entry| entry.scan.target.credentials.clone())
            .await
    }

    async fn vts(&self, scan_id: &str) -> Result<Vec<VT>, DaemonError> {
        self.read(scan_id, |entry| entry.scan.vts.clone()).await
    }
}

#[async_trait]
impl StatusFetcher for InMemoryDaemon {
    async fn scan_status(&self, scan_id: &str) -> Result<ScanStatus, DaemonError> {
        self.read(scan_id, |entry| entry.status.clone()).await
    }
}

#[async_trait]
impl ProgressSink for InMemoryDaemon {
    async fn set_total_hosts(&self, scan_id: &str, count: u64) -> Result<(), DaemonError> {
        self.modify(scan_id, |entry| entry.host_info.all = count)
            .await
    }

    async fn set_dead_hosts(&self, scan_id: &str, count: u64) -> Result<(), DaemonError> {
        self.modify(scan_id, |entry| entry.host_info.dead = count)
            .await
    }

    async fn update_host_progress(
        &self,
        scan_id: &str,
        progress: ProgressUpdate,
    ) -> Result<(), DaemonError> {
        self.modify(scan_id, |entry| entry.host_info.update_progress(&progress))
            .await
    }

    async fn mark_hosts_done(&self, scan_id: &str, hosts: Vec<Host>) -> Result<(), DaemonError> {
        self.modify(scan_id, |entry| {
            entry.host_info.register_done(&hosts);
            entry.finished_hosts.extend(hosts);
        })
        .await
    }
}

#[async_trait]
impl ResultSink for InMemoryDaemon {
    async fn submit_findings(
        &self,
        scan_id: &str,
        findings: Vec<Finding>,
    ) -> Result<(), DaemonError> {
        self.modify(scan_id, |entry| entry.findings.extend(findings))
            .await
    }
}

#[async_trait]
impl ScanCleaner for InMemoryDaemon {
    async fn cleanup_scan(&self, scan_id: &str) -> Result<(), DaemonError> {
        self.modify(scan_id, |entry| {
            entry.host_info.scanning.clear();
            entry.cleanups += 1;
        })
        .await
    }
}
