// SPDX-FileCopyrightText: 2025 Greenbone AG
//
// SPDX-License-Identifier: GPL-2.0-or-later WITH x11vnc-openssl-exception

/// A VT to execute during a scan, including its parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct VT {
    /// The ID of the VT to execute during a scan
    pub oid: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    /// The list of parameters for the VT
    pub parameters: Vec<Parameter>,
}

/// Representation of a parameter for a VT
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Parameter {
    /// The ID of the parameter.
    pub id: u16,
    /// The value of the parameter.
    pub value: String,
}
