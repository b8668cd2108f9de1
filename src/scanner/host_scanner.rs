// SPDX-FileCopyrightText: 2025 Greenbone AG
//
// SPDX-License-Identifier: GPL-2.0-or-later WITH x11vnc-openssl-exception

use async_trait::async_trait;
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
use tokio::sync::Mutex;

use super::error::HostScanError;
use crate::models::{Credential, Finding, FindingKind, Host, ScanID, VT};

/// The parameters of a scan that are shared by every host of its target.
///
/// Assembled once at the beginning of a scan execution from the data
/// stored in the daemon and handed to the scanner for each host.
#[derive(Debug, Clone, Default)]
pub struct ScanParams {
    pub scan_id: ScanID,
    pub ports: String,
    pub credentials: Vec<Credential>,
    pub vts: Vec<VT>,
}

/// Examines single hosts and produces findings for them.
///
/// This is the seam where a real scan engine is plugged in. The engine
/// decides what a host examination means; the executor guarantees that
/// findings reach the daemon before the host is reported as done.
#[async_trait]
pub trait HostScanner: Send + Sync {
    /// Returns true when the underlying scan engine is usable. Called by
    /// the daemon before it accepts scans.
    async fn check_available(&self) -> bool {
        true
    }

    /// Examines a single host and returns the findings for it. May take
    /// arbitrarily long. Errors are downgraded by the executor, they
    /// never abort the scan.
    async fn scan_host(
        &self,
        params: &ScanParams,
        host: &Host,
    ) -> Result<Vec<Finding>, HostScanError>;
}

/// A [HostScanner] that fabricates findings instead of probing hosts.
///
/// For each host one finding is drawn uniformly from the four finding
/// kinds, with fixed payloads and a test ID picked from the VTs selected
/// for the scan. Used to exercise the daemon integration without any
/// scan engine.
pub struct SimulatedScanner {
    rng: Mutex<StdRng>,
}

impl SimulatedScanner {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// A simulator with a fixed seed draws the same finding kinds in the
    /// same order on every run.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for SimulatedScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HostScanner for SimulatedScanner {
    async fn scan_host(
        &self,
        params: &ScanParams,
        host: &Host,
    ) -> Result<Vec<Finding>, HostScanError> {
        let (kind, test_id) = {
            let mut rng = self.rng.lock().await;
            let kind = match rng.gen_range(0..4) {
                0 => FindingKind::Error,
                1 => FindingKind::Log,
                2 => FindingKind::HostDetail,
                _ => FindingKind::Alarm,
            };
            let test_id = params.vts.choose(&mut *rng).map(|vt| vt.oid.clone());
            (kind, test_id)
        };
        let port = (!params.ports.is_empty()).then(|| params.ports.clone());
        let hostname = format!("{host}.hostname.net");
        let uri = Some("No location".to_string());

        let finding = match kind {
            FindingKind::Error => Finding {
                kind,
                host: host.clone(),
                hostname,
                name: "Some test name".to_string(),
                value: "error running the script".to_string(),
                port,
                test_id,
                uri,
                ..Default::default()
            },
            FindingKind::Log => Finding {
                kind,
                host: host.clone(),
                hostname,
                name: "Some test name".to_string(),
                value: "Some log".to_string(),
                port,
                test_id,
                uri,
                qod: Some(10),
                ..Default::default()
            },
            FindingKind::HostDetail => Finding {
                kind,
                host: host.clone(),
                hostname,
                name: "Some Test Name".to_string(),
                value: "Some host detail".to_string(),
                uri,
                ..Default::default()
            },
            FindingKind::Alarm => Finding {
                kind,
                host: host.clone(),
                hostname,
                name: "Some Test Name".to_string(),
                value: "Some Alarm".to_string(),
                port,
                test_id,
                uri,
                qod: Some(10),
                severity: Some(10.0),
                ..Default::default()
            },
        };
        Ok(vec![finding])
    }
}
