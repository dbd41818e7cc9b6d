//! Core domain types.
//!
//! These types represent the pure domain model, independent of the JSON
//! documents they are usually read from (see [`crate::contracts`]).
//!
//! # Structure
//!
//! - `host` - Host inventory types (`Host`, `Disk`, `HostInventory`)
//! - `config` - Cluster configuration groups and recommendation updates
//! - `property` - Path property descriptors (`PathPropertySpec`, `Cardinality`)

mod config;
mod host;
mod property;

pub use config::{
    CLUSTER_ENV_GROUP, ClusterConfig, ConfigGroup, ConfigUpdate, MOUNTS_IGNORE_LIST_PROPERTY,
};
pub use host::{Disk, Host, HostInventory};
pub use property::{Cardinality, PathPropertySpec, PropertySpecError};
