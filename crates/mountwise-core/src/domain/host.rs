//! Host inventory types.
//!
//! A `HostInventory` is the per-request snapshot of every registered host and
//! the mount points its agent reported. Hosts keep the order in which the
//! inventory listed them; that order drives first-discovered mount selection.

use serde::{Deserialize, Serialize};

use crate::utils::normalize_mount;

/// A single disk entry reported by a host agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disk {
    /// Filesystem path the device is attached under (e.g. `/grid/0`).
    pub mountpoint: String,
}

impl Disk {
    /// Create a disk entry for the given mount point.
    pub fn new(mountpoint: impl Into<String>) -> Self {
        Self {
            mountpoint: mountpoint.into(),
        }
    }
}

/// A registered cluster host and its reported disks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Host {
    /// Unique key of the host within an inventory.
    pub host_name: String,
    /// Externally resolvable name.
    pub public_host_name: String,
    /// Number of logical CPUs.
    pub cpu_count: u32,
    /// Total memory in kilobytes, as reported by the agent.
    pub total_memory: u64,
    /// Disks in agent-reported order. The same mount point may appear twice.
    pub disks: Vec<Disk>,
}

impl Host {
    /// Create a host with no disks. The public name defaults to `host_name`.
    pub fn new(host_name: impl Into<String>) -> Self {
        let host_name = host_name.into();
        Self {
            public_host_name: host_name.clone(),
            host_name,
            cpu_count: 0,
            total_memory: 0,
            disks: Vec::new(),
        }
    }

    /// Replace the disk list with one disk per mount point.
    #[must_use]
    pub fn with_mounts<I, S>(mut self, mounts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disks = mounts.into_iter().map(Disk::new).collect();
        self
    }

    /// Iterate the mount points of this host in reported order.
    pub fn mountpoints(&self) -> impl Iterator<Item = &str> {
        self.disks.iter().map(|disk| disk.mountpoint.as_str())
    }

    /// Whether any disk of this host is mounted at `mountpoint`.
    pub fn has_mount(&self, mountpoint: &str) -> bool {
        let mountpoint = normalize_mount(mountpoint);
        self.mountpoints().any(|m| normalize_mount(m) == mountpoint)
    }
}

/// Ordered collection of hosts keyed by `host_name`.
///
/// Uniqueness of host names is the caller's responsibility; the JSON boundary
/// in [`crate::contracts`] rejects duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HostInventory {
    hosts: Vec<Host>,
}

impl HostInventory {
    /// Create an empty inventory.
    pub const fn new() -> Self {
        Self { hosts: Vec::new() }
    }

    /// Build an inventory from hosts in the given order.
    pub const fn from_hosts(hosts: Vec<Host>) -> Self {
        Self { hosts }
    }

    /// Hosts in inventory order.
    pub fn hosts(&self) -> &[Host] {
        &self.hosts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Host> {
        self.hosts.iter()
    }

    /// Look up a host by its unique name.
    pub fn get(&self, host_name: &str) -> Option<&Host> {
        self.hosts.iter().find(|h| h.host_name == host_name)
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}

impl FromIterator<Host> for HostInventory {
    fn from_iter<T: IntoIterator<Item = Host>>(iter: T) -> Self {
        Self {
            hosts: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a HostInventory {
    type Item = &'a Host;
    type IntoIter = std::slice::Iter<'a, Host>;

    fn into_iter(self) -> Self::IntoIter {
        self.hosts.iter()
    }
}
