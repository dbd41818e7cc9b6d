//! JSON document contracts.
//!
//! Inventory and configuration documents arrive as loosely typed JSON from
//! the cluster registry and stack loader. These functions validate their
//! shape at the boundary and convert them into domain types, so the rest of
//! the crate only ever sees well-formed `HostInventory` and `ClusterConfig`.

pub mod config;
pub mod inventory;

pub use config::{config_from_value, parse_config, parse_services, services_from_value};
pub use inventory::{inventory_from_value, inventory_to_value, parse_inventory};
