// SPDX-FileCopyrightText: 2025 Greenbone AG
//
// SPDX-License-Identifier: GPL-2.0-or-later WITH x11vnc-openssl-exception

use std::collections::HashMap;

use crate::models::Host;

/// Progress of a single host within a running scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostProgress {
    /// The host is being scanned and has reached the given percentage
    Percent(u8),
    /// The host was found to be unreachable
    DeadHost,
    /// All work for the host is done
    Finished,
}

impl HostProgress {
    /// The wire representation of the progress. Dead hosts are sent as -1,
    /// finished hosts as 100.
    pub fn as_percent(&self) -> i32 {
        match self {
            HostProgress::Percent(p) => *p as i32,
            HostProgress::DeadHost => -1,
            HostProgress::Finished => 100,
        }
    }
}

/// Progress values for a batch of hosts, keyed by host address
pub type ProgressUpdate = HashMap<Host, HostProgress>;

/// Information about hosts of a running scan
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HostInfo {
    pub all: u64,
    pub dead: u64,
    pub finished: u64,
    // Hosts that are currently being scanned. The second entry is the host
    // scan progress.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub scanning: HashMap<String, i32>,
}

impl HostInfo {
    /// Counts the given hosts as finished.
    pub fn register_done(&mut self, hosts: &[Host]) {
        self.finished += hosts.len() as u64;
    }

    /// Updates the per host progress. Hosts that reached a terminal
    /// progress are removed from the scanning map, dead hosts are
    /// counted additionally.
    pub fn update_progress(&mut self, update: &ProgressUpdate) {
        for (host, progress) in update {
            match progress {
                HostProgress::Percent(p) => {
                    self.scanning.insert(host.to_string(), *p as i32);
                }
                HostProgress::DeadHost => {
                    self.dead += 1;
                    self.scanning.remove(host);
                }
                HostProgress::Finished => {
                    self.scanning.remove(host);
                }
            }
        }
    }
}
