// SPDX-FileCopyrightText: 2025 Greenbone AG
//
// SPDX-License-Identifier: GPL-2.0-or-later WITH x11vnc-openssl-exception

//! Overview of the structure of this module: The `ScanRunner` drives a
//! single scan from the stored parameters to a terminal state.  It
//! builds the `HostQueue` once, then takes one host at a time: it
//! checks the status the daemon tracks for the scan, lets a
//! `HostScanner` examine the host and pushes the produced findings and
//! the host progress back into the daemon.  The `HostScanner` is the
//! seam for a real scan engine; the `SimulatedScanner` implementation
//! fabricates one finding per host so that the daemon integration can
//! be run without any engine.

mod error;
mod host_queue;
mod host_scanner;
mod scan_runner;

pub use error::{ExecuteError, HostScanError};
pub use host_queue::HostQueue;
pub use host_scanner::{HostScanner, ScanParams, SimulatedScanner};
pub use scan_runner::{Config, ScanRunner};
