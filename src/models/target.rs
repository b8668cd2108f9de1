// SPDX-FileCopyrightText: 2025 Greenbone AG
//
// SPDX-License-Identifier: GPL-2.0-or-later WITH x11vnc-openssl-exception

use super::credential::Credential;

pub type Host = String;

/// Information about a target of a scan
#[derive(Default, Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Target {
    /// List of hosts to scan
    pub hosts: Vec<Host>,
    /// Port specification in scanner tool notation, e.g. `22,80,1024-1030`
    #[serde(default)]
    pub ports: String,
    #[serde(default)]
    /// List of excluded hosts to scan
    pub excluded_hosts: Vec<Host>,
    #[serde(default)]
    /// List of credentials used to get access to a system
    pub credentials: Vec<Credential>,
}
