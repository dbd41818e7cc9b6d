//! Host inventory documents.
//!
//! The registry reports hosts as:
//!
//! ```json
//! {"items": [{"Hosts": {"host_name": "c6401", "public_host_name": "c6401",
//!   "cpu_count": 4, "total_mem": 50331648,
//!   "disk_info": [{"mountpoint": "/"}, {"mountpoint": "/data"}]}}]}
//! ```
//!
//! Unknown fields are ignored. A host without `disk_info` is rejected rather
//! than treated as diskless.

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::{Value, json};

use crate::domain::{Disk, Host, HostInventory};
use crate::error::InventoryError;

#[derive(Debug, Deserialize)]
struct HostItemDto {
    #[serde(rename = "Hosts")]
    hosts: Option<HostRecordDto>,
}

#[derive(Debug, Deserialize)]
struct HostRecordDto {
    host_name: Option<String>,
    public_host_name: Option<String>,
    cpu_count: Option<u32>,
    total_mem: Option<u64>,
    disk_info: Option<Vec<DiskDto>>,
}

#[derive(Debug, Deserialize)]
struct DiskDto {
    mountpoint: Option<String>,
}

/// Parse an inventory document from JSON text.
pub fn parse_inventory(json: &str) -> Result<HostInventory, InventoryError> {
    let value: Value = serde_json::from_str(json)?;
    inventory_from_value(&value)
}

/// Validate an already parsed inventory document.
pub fn inventory_from_value(value: &Value) -> Result<HostInventory, InventoryError> {
    let items = value
        .get("items")
        .and_then(Value::as_array)
        .ok_or_else(|| InventoryError::malformed("items", "expected a list of host records"))?;

    let mut seen = HashSet::with_capacity(items.len());
    let mut hosts = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let host = host_from_item(index, item)?;
        if !seen.insert(host.host_name.clone()) {
            return Err(InventoryError::malformed(
                format!("items[{index}].Hosts.host_name"),
                format!("duplicate host {:?}", host.host_name),
            ));
        }
        hosts.push(host);
    }

    Ok(HostInventory::from_hosts(hosts))
}

fn host_from_item(index: usize, item: &Value) -> Result<Host, InventoryError> {
    let location = format!("items[{index}]");
    let dto: HostItemDto = HostItemDto::deserialize(item)
        .map_err(|e| InventoryError::malformed(&location, e.to_string()))?;

    let record = dto
        .hosts
        .ok_or_else(|| InventoryError::malformed(&location, "missing `Hosts` record"))?;

    let location = format!("{location}.Hosts");
    let host_name = record
        .host_name
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| InventoryError::malformed(&location, "missing `host_name`"))?;
    let disk_info = record
        .disk_info
        .ok_or_else(|| InventoryError::malformed(&location, "missing `disk_info`"))?;

    let disks = disk_info
        .into_iter()
        .enumerate()
        .map(|(i, disk)| {
            disk.mountpoint.map(Disk::new).ok_or_else(|| {
                InventoryError::malformed(format!("{location}.disk_info[{i}]"), "missing `mountpoint`")
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Host {
        public_host_name: record.public_host_name.unwrap_or_else(|| host_name.clone()),
        host_name,
        cpu_count: record.cpu_count.unwrap_or_default(),
        total_memory: record.total_mem.unwrap_or_default(),
        disks,
    })
}

/// Render an inventory back into the registry document shape.
pub fn inventory_to_value(inventory: &HostInventory) -> Value {
    let items: Vec<Value> = inventory
        .iter()
        .map(|host| {
            let disks: Vec<Value> = host
                .disks
                .iter()
                .map(|disk| json!({ "mountpoint": disk.mountpoint }))
                .collect();
            json!({
                "Hosts": {
                    "host_name": host.host_name,
                    "public_host_name": host.public_host_name,
                    "cpu_count": host.cpu_count,
                    "total_mem": host.total_memory,
                    "disk_info": disks,
                }
            })
        })
        .collect();
    json!({ "items": items })
}
