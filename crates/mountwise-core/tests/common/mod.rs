//! Test fixtures shaped like registry and stack loader documents.

#![allow(dead_code)]

use mountwise_core::contracts::{inventory_from_value, services_from_value};
use mountwise_core::{ClusterConfig, HostInventory};
use serde_json::{Value, json};

/// Builds one registry host item with the given mount points.
pub fn host_item(name: &str, mounts: &[&str]) -> Value {
    let disks: Vec<Value> = mounts.iter().map(|m| json!({ "mountpoint": m })).collect();
    json!({
        "Hosts": {
            "cpu_count": 4,
            "total_mem": 50_331_648,
            "disk_info": disks,
            "public_host_name": name,
            "host_name": name,
        }
    })
}

/// Parses an inventory from `(host name, mounts)` pairs.
pub fn inventory(hosts: &[(&str, &[&str])]) -> HostInventory {
    let items: Vec<Value> = hosts.iter().map(|(name, m)| host_item(name, m)).collect();
    inventory_from_value(&json!({ "items": items })).expect("fixture inventory is well formed")
}

/// Two hosts whose only shared non-reserved mount is `/data`.
pub fn two_host_inventory(second_host_extra: &[&str]) -> HostInventory {
    let mut second = vec!["/"];
    second.extend_from_slice(second_host_extra);
    second.extend_from_slice(&["/dev/shm1", "/vagrant1", "/data"]);

    inventory(&[
        (
            "c6401.ambari.apache.org",
            &["/", "/dev/shm", "/vagrant", "/dev/shm", "/vagrant", "/data"],
        ),
        ("c6402.ambari.apache.org", second.as_slice()),
    ])
}

/// A services document carrying the given ignore list.
pub fn services(ignore_list: &str) -> ClusterConfig {
    services_from_value(&json!({
        "Versions": {
            "parent_stack_version": "2.5",
            "stack_name": "HDP",
            "stack_version": "2.6"
        },
        "services": [],
        "configurations": {
            "cluster-env": {
                "properties": { "agent_mounts_ignore_list": ignore_list }
            },
            "some-site": { "path_prop": "/test" }
        }
    }))
    .expect("fixture services document is well formed")
}
