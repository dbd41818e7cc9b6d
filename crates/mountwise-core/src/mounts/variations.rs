//! Cluster-uniform mount discovery and path variation generation.
//!
//! A mount point qualifies for data directories only when it is a
//! *candidate* on every host: not reserved, not ignored, and reported by the
//! host's agent. The surviving mounts are returned in first-discovered order
//! (inventory order of the first host, then its disk order), which is stable
//! for identical input.

use std::collections::HashSet;

use tracing::{debug, warn};

use super::{IgnoreSet, ReservedPrefixSet};
use crate::domain::{ClusterConfig, Host, HostInventory};
use crate::utils::{join_mount_path, normalize_mount};

/// A base path remapped onto one cluster-uniform mount point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountVariation {
    pub mountpoint: String,
    pub path: String,
}

/// Computes path variations from an inventory under a fixed set of rules.
#[derive(Debug, Clone, Copy)]
pub struct VariationGenerator<'a> {
    reserved: &'a ReservedPrefixSet,
    ignore: &'a IgnoreSet,
}

impl<'a> VariationGenerator<'a> {
    pub const fn new(reserved: &'a ReservedPrefixSet, ignore: &'a IgnoreSet) -> Self {
        Self { reserved, ignore }
    }

    /// Whether a mount point may host service data at all.
    pub fn is_candidate(&self, mountpoint: &str) -> bool {
        let mountpoint = normalize_mount(mountpoint);
        !mountpoint.is_empty()
            && !self.reserved.is_reserved(mountpoint)
            && !self.ignore.contains(mountpoint)
    }

    /// Candidate mounts of one host, normalized and deduplicated, in disk
    /// order.
    pub fn candidate_mounts<'h>(&self, host: &'h Host) -> Vec<&'h str> {
        let mut seen = HashSet::new();
        host.mountpoints()
            .map(normalize_mount)
            .filter(|m| self.is_candidate(m) && seen.insert(*m))
            .collect()
    }

    /// Mounts that are candidates on every host. Empty for an empty inventory.
    pub fn uniform_mounts<'h>(&self, inventory: &'h HostInventory) -> Vec<&'h str> {
        let mut hosts = inventory.iter();
        let Some(first) = hosts.next() else {
            return Vec::new();
        };

        let mut common = self.candidate_mounts(first);
        debug!(host = %first.host_name, candidates = common.len(), "Classified host mounts");

        for host in hosts {
            if common.is_empty() {
                break;
            }
            let present: HashSet<&str> = self.candidate_mounts(host).into_iter().collect();
            debug!(host = %host.host_name, candidates = present.len(), "Classified host mounts");
            common.retain(|m| present.contains(m));
        }

        common
    }

    /// Remap `base_path` onto every cluster-uniform mount.
    ///
    /// Unlike [`VariationGenerator::variations`] this returns nothing when no
    /// uniform mount exists, so callers can tell the fallback apart from a
    /// real variation.
    ///
    /// `component_name` is the hook for component-specific exclusion policy;
    /// today every component sees the same uniform mounts.
    pub fn mount_variations(
        &self,
        base_path: &str,
        component_name: &str,
        inventory: &HostInventory,
    ) -> Vec<MountVariation> {
        let base = base_path.trim();
        if base.is_empty() {
            return Vec::new();
        }

        let mounts = self.uniform_mounts(inventory);
        debug!(
            component = component_name,
            base_path = base,
            hosts = inventory.len(),
            uniform = mounts.len(),
            "Computed cluster-uniform mounts"
        );

        let mut variations: Vec<MountVariation> = Vec::with_capacity(mounts.len());
        for mount in mounts {
            let path = join_mount_path(mount, base);
            if variations.iter().all(|v| v.path != path) {
                variations.push(MountVariation {
                    mountpoint: mount.to_string(),
                    path,
                });
            }
        }
        variations
    }

    /// Path variations of `base_path`, or `[base_path]` when no mount is
    /// uniform across the inventory. An empty base path yields nothing.
    pub fn variations(
        &self,
        base_path: &str,
        component_name: &str,
        inventory: &HostInventory,
    ) -> Vec<String> {
        let base = base_path.trim();
        if base.is_empty() {
            return Vec::new();
        }

        let variations = self.mount_variations(base, component_name, inventory);
        if variations.is_empty() {
            warn!(
                component = component_name,
                base_path = base,
                "No mount point is shared by all hosts, keeping base path"
            );
            return vec![base.to_string()];
        }
        variations.into_iter().map(|v| v.path).collect()
    }
}

/// Path variations of `base_path` using the built-in reserved prefixes and
/// the ignore list of `cluster_config`.
///
/// `inventory` is normally the output of
/// [`filter_host_mounts`](super::filter_host_mounts); ignored mounts are
/// excluded again here for callers that skip the filter.
///
/// # Examples
///
/// ```rust
/// use mountwise_core::mounts::mount_path_variations;
/// use mountwise_core::{ClusterConfig, Host, HostInventory};
///
/// let inventory = HostInventory::from_hosts(vec![
///     Host::new("c6401").with_mounts(["/", "/grid/0", "/grid/1"]),
///     Host::new("c6402").with_mounts(["/", "/grid/1", "/grid/0"]),
/// ]);
///
/// let paths = mount_path_variations("/hadoop/hdfs/data", "DATANODE", &ClusterConfig::new(), &inventory);
/// assert_eq!(paths, vec!["/grid/0/hadoop/hdfs/data", "/grid/1/hadoop/hdfs/data"]);
/// ```
pub fn mount_path_variations(
    base_path: &str,
    component_name: &str,
    cluster_config: &ClusterConfig,
    inventory: &HostInventory,
) -> Vec<String> {
    let reserved = ReservedPrefixSet::builtin();
    let ignore = IgnoreSet::from_config(cluster_config);
    VariationGenerator::new(&reserved, &ignore).variations(base_path, component_name, inventory)
}
