// SPDX-FileCopyrightText: 2025 Greenbone AG
//
// SPDX-License-Identifier: GPL-2.0-or-later WITH x11vnc-openssl-exception

use itertools::Itertools;
use tracing::debug;

use crate::models::Host;

/// The hosts a scan still has to process.
///
/// Built once per scan execution from the stored host list. Exclusions
/// and duplicates are dropped at construction so that the executor only
/// ever sees hosts that are actually allowed to be scanned.
pub struct HostQueue {
    hosts: Vec<Host>,
}

impl HostQueue {
    pub fn new(hosts: Vec<Host>, excluded: &[Host]) -> Self {
        let all = hosts.len();
        let hosts: Vec<Host> = hosts
            .into_iter()
            .filter(|host| !excluded.contains(host))
            .collect();
        let kept = hosts.len();
        let hosts: Vec<Host> = hosts.into_iter().unique().collect();
        debug!(
            excluded = all - kept,
            duplicates = kept - hosts.len(),
            "prepared host queue"
        );
        Self { hosts }
    }

    /// Removes and returns the next host to scan, or `None` once every
    /// host has been handed out.
    pub fn pop(&mut self) -> Option<Host> {
        self.hosts.pop()
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hosts(hosts: &[&str]) -> Vec<Host> {
        hosts.iter().map(|h| h.to_string()).collect()
    }

    #[test]
    fn drops_excluded_hosts() {
        let mut queue = HostQueue::new(
            hosts(&["10.0.0.1", "10.0.0.2", "10.0.0.3"]),
            &hosts(&["10.0.0.2"]),
        );
        assert_eq!(queue.len(), 2);
        while let Some(host) = queue.pop() {
            assert_ne!(host, "10.0.0.2");
        }
    }

    #[test]
    fn drops_duplicates() {
        let queue = HostQueue::new(hosts(&["10.0.0.1", "10.0.0.1", "10.0.0.2"]), &[]);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn hands_out_every_host_exactly_once() {
        let mut queue = HostQueue::new(hosts(&["a", "b", "c"]), &[]);
        let mut seen = Vec::new();
        while let Some(host) = queue.pop() {
            seen.push(host);
        }
        seen.sort();
        assert_eq!(seen, hosts(&["a", "b", "c"]));
        assert!(queue.is_empty());
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn empty_input_is_empty() {
        let mut queue = HostQueue::new(Vec::new(), &hosts(&["10.0.0.1"]));
        assert!(queue.is_empty());
        assert_eq!(queue.pop(), None);
    }
}
