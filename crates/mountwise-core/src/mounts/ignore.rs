//! Administrator mount exclusions.

use std::collections::BTreeSet;

use crate::domain::{CLUSTER_ENV_GROUP, ClusterConfig, MOUNTS_IGNORE_LIST_PROPERTY};
use crate::utils::normalize_mount;

/// Mount points excluded from all data path recommendations.
///
/// Parsed from the comma-separated `agent_mounts_ignore_list` property:
/// entries are normalized (whitespace and trailing `/` removed), empties
/// dropped and duplicates collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    mounts: BTreeSet<String>,
}

impl IgnoreSet {
    pub fn parse(raw: &str) -> Self {
        raw.split(',').collect()
    }

    /// Read the ignore list from `cluster-env`. A missing group or property
    /// yields an empty set.
    pub fn from_config(config: &ClusterConfig) -> Self {
        config
            .property(CLUSTER_ENV_GROUP, MOUNTS_IGNORE_LIST_PROPERTY)
            .map(Self::parse)
            .unwrap_or_default()
    }

    pub fn contains(&self, mountpoint: &str) -> bool {
        self.mounts.contains(normalize_mount(mountpoint))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.mounts.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.mounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mounts.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for IgnoreSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mounts = iter
            .into_iter()
            .map(|entry| normalize_mount(entry.as_ref()).to_string())
            .filter(|entry| !entry.is_empty())
            .collect();
        Self { mounts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_dedupes() {
        let set = IgnoreSet::parse(" /data , /grid/1,,/data ,");
        let entries: Vec<&str> = set.iter().collect();
        assert_eq!(entries, vec!["/data", "/grid/1"]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(IgnoreSet::parse("").is_empty());
        assert!(IgnoreSet::parse(" , ,").is_empty());
    }

    #[test]
    fn test_from_config_missing_group() {
        let config = ClusterConfig::new().with_property("hdfs-site", "x", "y");
        assert!(IgnoreSet::from_config(&config).is_empty());
    }

    #[test]
    fn test_from_config() {
        let config =
            ClusterConfig::new().with_property(CLUSTER_ENV_GROUP, MOUNTS_IGNORE_LIST_PROPERTY, "/data");
        let set = IgnoreSet::from_config(&config);
        assert_eq!(set.len(), 1);
        assert!(set.contains("/data"));
        assert!(set.contains(" /data"));
        assert!(!set.contains("/data1"));
    }

    #[test]
    fn test_trailing_separator_matches() {
        let set = IgnoreSet::parse("/grid/0/");
        assert!(set.contains("/grid/0"));
        assert!(IgnoreSet::parse("/data").contains("/data/"));
    }
}
