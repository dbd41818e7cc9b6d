//! Mount point classification, filtering and path variation.
//!
//! The pieces are used in this order:
//!
//! 1. [`filter_host_mounts`] drops administrator-ignored mounts from the
//!    inventory.
//! 2. [`mount_path_variations`] intersects the remaining non-reserved mounts
//!    across all hosts and remaps a base path onto each survivor.

mod filter;
mod ignore;
mod reserved;
mod variations;

pub use filter::{filter_host_mounts, filter_with_ignore_set};
pub use ignore::IgnoreSet;
pub use reserved::{RESERVED_MOUNT_PREFIXES, ROOT_MOUNT, ReservedPrefixSet, is_reserved_mount};
pub use variations::{MountVariation, VariationGenerator, mount_path_variations};
