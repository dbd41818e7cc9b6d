//! Path joining for mount-qualified directories.
//!
//! Paths here are plain `/`-separated strings describing remote hosts, so
//! `std::path` (which follows the local platform) is not used.

/// Join a mount point and a directory into one absolute path.
///
/// Empty segments are dropped, so doubled or trailing separators on either
/// side never survive.
///
/// ```rust
/// use mountwise_core::utils::join_mount_path;
///
/// assert_eq!(join_mount_path("/data", "/test"), "/data/test");
/// assert_eq!(join_mount_path("/grid/0/", "//hadoop//hdfs/"), "/grid/0/hadoop/hdfs");
/// assert_eq!(join_mount_path("/", "/test"), "/test");
/// ```
pub fn join_mount_path(mountpoint: &str, path: &str) -> String {
    let segments: Vec<&str> = mountpoint
        .trim()
        .split('/')
        .chain(path.trim().split('/'))
        .filter(|segment| !segment.is_empty())
        .collect();
    format!("/{}", segments.join("/"))
}

/// Trim whitespace and trailing separators from a mount point. The root
/// mount stays `/`.
///
/// ```rust
/// use mountwise_core::utils::normalize_mount;
///
/// assert_eq!(normalize_mount(" /data/ "), "/data");
/// assert_eq!(normalize_mount("//"), "/");
/// ```
pub fn normalize_mount(mountpoint: &str) -> &str {
    let trimmed = mountpoint.trim();
    match trimmed.trim_end_matches('/') {
        "" if trimmed.starts_with('/') => "/",
        stripped => stripped,
    }
}

/// Strip a leading mount point from `path` on a segment boundary.
///
/// Returns `None` when `path` does not live under `mountpoint`.
pub fn strip_mount<'a>(path: &'a str, mountpoint: &str) -> Option<&'a str> {
    let mount = normalize_mount(mountpoint);
    if mount.is_empty() || mount == "/" {
        return None;
    }
    let rest = path.trim().strip_prefix(mount)?;
    if rest.is_empty() || rest.starts_with('/') {
        Some(rest)
    } else {
        None
    }
}
