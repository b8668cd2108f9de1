// SPDX-FileCopyrightText: 2025 Greenbone AG
//
// SPDX-License-Identifier: GPL-2.0-or-later WITH x11vnc-openssl-exception

use std::time::Duration;

use tracing::{debug, error, info, warn};

use super::error::{ExecuteError, HostScanError};
use super::host_queue::HostQueue;
use super::host_scanner::{HostScanner, ScanParams};
use crate::daemon::HostDaemon;
use crate::models::{Finding, FindingKind, Host, HostProgress, ProgressUpdate, ScanStatus};

/// Configuration of a scan execution.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Waiting time between two hosts. Bounds the rate of host
    /// processing, a real scan engine replaces it with actual scan
    /// latency.
    pub host_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host_delay: Duration::from_secs(1),
        }
    }
}

/// Runs a single scan until its host queue is drained or the daemon
/// signals termination.
///
/// The runner owns nothing: the scan parameters, the status and the
/// sinks for findings and progress all live in the daemon, the per host
/// work is delegated to a [HostScanner]. The daemon is expected to
/// invoke [ScanRunner::run] at most once per scan ID concurrently.
pub struct ScanRunner<'a, D, S> {
    daemon: &'a D,
    scanner: &'a S,
    config: Config,
}

impl<'a, D, S> ScanRunner<'a, D, S>
where
    D: HostDaemon,
    S: HostScanner,
{
    pub fn new(daemon: &'a D, scanner: &'a S) -> Self {
        Self {
            daemon,
            scanner,
            config: Config::default(),
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Availability probe the daemon calls before accepting scans.
    pub async fn check_available(&self) -> bool {
        self.scanner.check_available().await
    }

    /// Runs the scan with the given ID to completion or cancellation.
    ///
    /// Findings and progress are observed entirely through the daemon
    /// sinks. An `Err` is only returned when the daemon itself fails,
    /// e.g. when the scan parameters cannot be retrieved; a stopped or
    /// interrupted scan returns `Ok` like a drained one.
    pub async fn run(&self, scan_id: &str) -> Result<(), ExecuteError> {
        let (params, mut queue) = self.prepare(scan_id).await?;
        self.daemon
            .set_total_hosts(scan_id, queue.len() as u64)
            .await?;
        self.daemon.set_dead_hosts(scan_id, 0).await?;

        while let Some(host) = queue.pop() {
            // The status is owned by the daemon and may flip at any
            // time, it has to be read once per host.
            match self.daemon.scan_status(scan_id).await? {
                ScanStatus::Interrupted => {
                    if let Err(error) = self.daemon.cleanup_scan(scan_id).await {
                        warn!(%error, scan_id, "unable to clean up");
                    }
                    error!(scan_id, "scan interrupted");
                    return Ok(());
                }
                ScanStatus::Stopped | ScanStatus::Finished => {
                    debug!(scan_id, "scan stopped or finished");
                    return Ok(());
                }
                ScanStatus::Running => {}
            }
            self.process_host(&params, host).await?;
            if !self.config.host_delay.is_zero() {
                tokio::time::sleep(self.config.host_delay).await;
            }
        }
        debug!(scan_id, "end of scan");
        Ok(())
    }

    /// Retrieves the parameters of the scan and builds the host queue.
    /// A failure here is fatal, without parameters there is nothing to
    /// execute.
    async fn prepare(&self, scan_id: &str) -> Result<(ScanParams, HostQueue), ExecuteError> {
        let hosts = self.daemon.host_list(scan_id).await?;
        info!(?hosts, "target list");
        let ports = self.daemon.ports(scan_id).await?;
        info!(ports, "port list");
        let excluded = self.daemon.exclude_hosts(scan_id).await?;
        info!(?excluded, "exclude hosts list");
        let credentials = self.daemon.credentials(scan_id).await?;
        for credential in &credentials {
            info!(
                service = credential.service.as_ref(),
                kind = credential.credential_type.as_ref(),
                username = credential.username(),
                "credential"
            );
        }
        let vts = self.daemon.vts(scan_id).await?;
        let queue = HostQueue::new(hosts, &excluded);
        let params = ScanParams {
            scan_id: scan_id.to_string(),
            ports,
            credentials,
            vts,
        };
        Ok((params, queue))
    }

    /// Lets the scanner examine one host and reports the outcome. A
    /// scanner failure is downgraded to an error finding so that the
    /// remaining hosts are still scanned.
    async fn process_host(&self, params: &ScanParams, host: Host) -> Result<(), ExecuteError> {
        let scan_id = params.scan_id.as_str();
        let findings = match self.scanner.scan_host(params, &host).await {
            Ok(findings) => findings,
            Err(error) => {
                warn!(%error, host, "unable to examine host");
                vec![failure_finding(&host, &error)]
            }
        };
        if !findings.is_empty() {
            debug!(scan_id, results = findings.len(), "inserting results");
            self.daemon.submit_findings(scan_id, findings).await?;
        }
        self.daemon
            .mark_hosts_done(scan_id, vec![host.clone()])
            .await?;
        let progress = ProgressUpdate::from([(host, HostProgress::Finished)]);
        self.daemon.update_host_progress(scan_id, progress).await?;
        Ok(())
    }
}

fn failure_finding(host: &Host, error: &HostScanError) -> Finding {
    Finding {
        kind: FindingKind::Error,
        host: host.clone(),
        hostname: host.clone(),
        name: "Host scan failure".to_string(),
        value: error.to_string(),
        ..Default::default()
    }
}
