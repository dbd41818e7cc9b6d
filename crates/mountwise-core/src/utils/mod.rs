//! Small shared helpers.

pub mod path;

pub use path::{join_mount_path, normalize_mount, strip_mount};
