// SPDX-FileCopyrightText: 2025 Greenbone AG
//
// SPDX-License-Identifier: GPL-2.0-or-later WITH x11vnc-openssl-exception

use super::target::Host;

/// A single result reported for a host during a scan
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Finding {
    #[serde(rename = "type")]
    /// Type of the finding
    pub kind: FindingKind,
    /// Address of the host the finding belongs to
    pub host: Host,
    /// DNS name of the host
    pub hostname: String,
    /// Name of the test that produced the finding
    pub name: String,
    /// Payload of the finding, e.g. a log line or an alarm description
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    /// Port specification the finding refers to
    pub port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    /// ID of the test that produced the finding
    pub test_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    /// Location the finding refers to
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    /// Quality of detection
    pub qod: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    /// Severity of the finding
    pub severity: Option<f32>,
}

/// Enum of the possible types of findings
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// An issue that requires attention, carries a severity
    Alarm,
    /// Information gathered while examining a host
    #[default]
    Log,
    /// A failure that occurred while examining a host
    Error,
    /// A detail about the host itself, e.g. its OS
    HostDetail,
}

impl std::fmt::Display for FindingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                FindingKind::Alarm => "alarm",
                FindingKind::Log => "log",
                FindingKind::Error => "error",
                FindingKind::HostDetail => "host_detail",
            }
        )
    }
}
