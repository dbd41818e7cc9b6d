//! Services that orchestrate the mount recommendation steps.
//!
//! - `property_updater` - formats variations into property values
//! - `advisor` - settings-aware composition of filter, variations and update

mod advisor;
mod property_updater;

pub use advisor::MountAdvisor;
pub use property_updater::{
    PropertyUpdater, recommend_mount_properties, update_mount_properties,
};
