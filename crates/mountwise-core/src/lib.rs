#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod contracts;
pub mod domain;
pub mod error;
pub mod mounts;
pub mod services;
pub mod settings;
pub mod utils;

// Re-export commonly used types for convenience
pub use domain::{
    CLUSTER_ENV_GROUP, Cardinality, ClusterConfig, ConfigGroup, ConfigUpdate, Disk, Host,
    HostInventory, MOUNTS_IGNORE_LIST_PROPERTY, PathPropertySpec, PropertySpecError,
};
pub use error::InventoryError;
pub use mounts::{
    IgnoreSet, MountVariation, RESERVED_MOUNT_PREFIXES, ReservedPrefixSet, VariationGenerator,
    filter_host_mounts, is_reserved_mount, mount_path_variations,
};
pub use services::{
    MountAdvisor, PropertyUpdater, recommend_mount_properties, update_mount_properties,
};
pub use settings::{
    AdvisorSettings, SelectionPolicy, SettingsError, validate_settings,
};
