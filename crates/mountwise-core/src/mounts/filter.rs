//! Removal of administrator-excluded mount points from an inventory.

use tracing::debug;

use super::IgnoreSet;
use crate::domain::{ClusterConfig, Host, HostInventory};

/// Return a copy of `inventory` without disks listed in the cluster's
/// `agent_mounts_ignore_list`.
///
/// The input inventory is left untouched. A missing ignore list filters
/// nothing.
///
/// # Examples
///
/// ```rust
/// use mountwise_core::mounts::filter_host_mounts;
/// use mountwise_core::{ClusterConfig, Host, HostInventory};
///
/// let inventory = HostInventory::from_hosts(vec![
///     Host::new("c6401").with_mounts(["/", "/data", "/grid/0"]),
/// ]);
/// let config = ClusterConfig::new()
///     .with_property("cluster-env", "agent_mounts_ignore_list", "/data");
///
/// let filtered = filter_host_mounts(&inventory, &config);
/// let mounts: Vec<&str> = filtered.hosts()[0].mountpoints().collect();
/// assert_eq!(mounts, vec!["/", "/grid/0"]);
/// ```
pub fn filter_host_mounts(inventory: &HostInventory, cluster_config: &ClusterConfig) -> HostInventory {
    filter_with_ignore_set(inventory, &IgnoreSet::from_config(cluster_config))
}

/// Same as [`filter_host_mounts`] with an already parsed ignore set.
pub fn filter_with_ignore_set(inventory: &HostInventory, ignore: &IgnoreSet) -> HostInventory {
    if ignore.is_empty() {
        return inventory.clone();
    }

    inventory
        .iter()
        .map(|host| {
            let kept = filter_host(host, ignore);
            let removed = host.disks.len() - kept.disks.len();
            if removed > 0 {
                debug!(host = %host.host_name, removed, "Dropped ignored mount points");
            }
            kept
        })
        .collect()
}

fn filter_host(host: &Host, ignore: &IgnoreSet) -> Host {
    Host {
        disks: host
            .disks
            .iter()
            .filter(|disk| !ignore.contains(&disk.mountpoint))
            .cloned()
            .collect(),
        ..host.clone()
    }
}
