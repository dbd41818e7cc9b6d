//! Mount points that can never hold service data.

use crate::utils::normalize_mount;

/// The root filesystem. Matches only exactly, since every absolute path
/// starts with it.
pub const ROOT_MOUNT: &str = "/";

/// Built-in reserved prefixes: root, boot, proc/sys pseudo-filesystems,
/// VM share mounts and device shared memory.
pub const RESERVED_MOUNT_PREFIXES: [&str; 6] =
    ["/", "/boot", "/proc", "/sys", "/vagrant", "/dev/shm"];

/// Whether `mountpoint` is reserved by the built-in prefix set.
pub fn is_reserved_mount(mountpoint: &str) -> bool {
    let mountpoint = normalize_mount(mountpoint);
    RESERVED_MOUNT_PREFIXES
        .iter()
        .any(|prefix| matches_prefix(prefix, mountpoint))
}

/// A mount point is reserved if it equals a prefix or starts with it.
fn matches_prefix(prefix: &str, mountpoint: &str) -> bool {
    if prefix == ROOT_MOUNT {
        return mountpoint == ROOT_MOUNT;
    }
    mountpoint.starts_with(prefix)
}

/// Effective reserved prefixes: the built-in set plus configured extras.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedPrefixSet {
    prefixes: Vec<String>,
}

impl Default for ReservedPrefixSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ReservedPrefixSet {
    /// The built-in [`RESERVED_MOUNT_PREFIXES`].
    pub fn builtin() -> Self {
        Self {
            prefixes: RESERVED_MOUNT_PREFIXES.iter().map(ToString::to_string).collect(),
        }
    }

    /// Add extra prefixes. Trailing separators are dropped so `/mnt/` also
    /// reserves `/mnt` itself; blanks and duplicates are skipped.
    #[must_use]
    pub fn with_extra<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for prefix in extra {
            let prefix = normalize_mount(prefix.as_ref()).to_string();
            if !prefix.is_empty() && !self.prefixes.iter().any(|p| *p == prefix) {
                self.prefixes.push(prefix);
            }
        }
        self
    }

    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.prefixes.iter().map(String::as_str)
    }

    pub fn is_reserved(&self, mountpoint: &str) -> bool {
        let mountpoint = normalize_mount(mountpoint);
        self.prefixes
            .iter()
            .any(|prefix| matches_prefix(prefix, mountpoint))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_matches_only_exactly() {
        assert!(is_reserved_mount("/"));
        assert!(!is_reserved_mount("/data"));
        assert!(!is_reserved_mount("/grid/0"));
    }

    #[test]
    fn test_builtin_members() {
        for mount in ["/boot", "/proc", "/sys", "/vagrant", "/dev/shm"] {
            assert!(is_reserved_mount(mount), "{mount} should be reserved");
        }
    }

    #[test]
    fn test_prefix_rule() {
        assert!(is_reserved_mount("/boot/efi"));
        assert!(is_reserved_mount("/dev/shm1"));
        assert!(is_reserved_mount("/vagrant1"));
        assert!(is_reserved_mount("/sys/fs/cgroup"));
        assert!(!is_reserved_mount("/me"));
        assert!(!is_reserved_mount("/dev/sda1"));
    }

    #[test]
    fn test_normalizes_before_matching() {
        assert!(is_reserved_mount(" /proc "));
        assert!(is_reserved_mount("/boot/"));
        assert!(is_reserved_mount("//"));
        assert!(!is_reserved_mount("/data/"));
    }

    #[test]
    fn test_builtin_set_agrees_with_free_function() {
        let set = ReservedPrefixSet::builtin();
        for mount in ["/", "/boot", "/dev/shm1", "/data", "/me", "/grid/1"] {
            assert_eq!(set.is_reserved(mount), is_reserved_mount(mount), "{mount}");
        }
    }

    #[test]
    fn test_extra_prefixes() {
        let set = ReservedPrefixSet::builtin().with_extra(["/mnt/", "  ", "/boot", "/tmp"]);
        assert!(set.is_reserved("/mnt"));
        assert!(set.is_reserved("/mnt/usb"));
        assert!(set.is_reserved("/tmp"));
        assert!(!set.is_reserved("/data"));
        assert_eq!(set.prefixes().count(), RESERVED_MOUNT_PREFIXES.len() + 2);
    }
}
