//! Cluster configuration types.
//!
//! Configuration is organised in named groups (`cluster-env`, `hdfs-site`,
//! ...) each holding a flat `properties` map of string values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Group holding cluster-wide agent settings.
pub const CLUSTER_ENV_GROUP: &str = "cluster-env";

/// Property in [`CLUSTER_ENV_GROUP`] listing mount points excluded from
/// data directory recommendations.
pub const MOUNTS_IGNORE_LIST_PROPERTY: &str = "agent_mounts_ignore_list";

/// One named configuration group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigGroup {
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

impl ConfigGroup {
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }
}

/// Mapping of group name to configuration group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusterConfig {
    groups: BTreeMap<String, ConfigGroup>,
}

impl ClusterConfig {
    pub const fn new() -> Self {
        Self {
            groups: BTreeMap::new(),
        }
    }

    pub fn group(&self, name: &str) -> Option<&ConfigGroup> {
        self.groups.get(name)
    }

    /// Get a property value, or `None` if the group or property is absent.
    pub fn property(&self, group: &str, name: &str) -> Option<&str> {
        self.groups.get(group).and_then(|g| g.property(name))
    }

    /// Set a property, creating the group if needed.
    pub fn set_property(
        &mut self,
        group: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.groups
            .entry(group.into())
            .or_default()
            .properties
            .insert(name.into(), value.into());
    }

    /// Builder form of [`ClusterConfig::set_property`].
    #[must_use]
    pub fn with_property(
        mut self,
        group: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.set_property(group, name, value);
        self
    }

    /// Insert an empty group if it does not exist yet.
    pub fn ensure_group(&mut self, name: impl Into<String>) -> &mut ConfigGroup {
        self.groups.entry(name.into()).or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Merge a recommendation into this configuration.
    ///
    /// Missing groups are created; only the properties named in `update` are
    /// overwritten.
    pub fn apply(&mut self, update: &ConfigUpdate) {
        for (group, name, value) in update.iter() {
            self.set_property(group, name, value);
        }
    }
}

/// Property values computed by a recommendation pass, not yet merged.
///
/// Serializes in the same `{group: {"properties": {...}}}` shape as
/// [`ClusterConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConfigUpdate {
    groups: BTreeMap<String, ConfigGroup>,
}

impl ConfigUpdate {
    pub const fn new() -> Self {
        Self {
            groups: BTreeMap::new(),
        }
    }

    /// Record a recommended value, replacing any earlier one for the property.
    pub fn set(
        &mut self,
        group: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.groups
            .entry(group.into())
            .or_default()
            .properties
            .insert(name.into(), value.into());
    }

    pub fn get(&self, group: &str, name: &str) -> Option<&str> {
        self.groups.get(group).and_then(|g| g.property(name))
    }

    /// Iterate `(group, property, value)` triples in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.groups.iter().flat_map(|(group, g)| {
            g.properties
                .iter()
                .map(move |(name, value)| (group.as_str(), name.as_str(), value.as_str()))
        })
    }

    /// Number of property values held.
    pub fn len(&self) -> usize {
        self.groups.values().map(|g| g.properties.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_lookup_on_missing_group() {
        let config = ClusterConfig::new();
        assert_eq!(config.property(CLUSTER_ENV_GROUP, MOUNTS_IGNORE_LIST_PROPERTY), None);
    }

    #[test]
    fn test_apply_creates_group_and_keeps_other_properties() {
        let mut config = ClusterConfig::new()
            .with_property("hdfs-site", "dfs.replication", "3")
            .with_property("hdfs-site", "dfs.datanode.data.dir", "/hadoop/hdfs/data");

        let mut update = ConfigUpdate::new();
        update.set("hdfs-site", "dfs.datanode.data.dir", "/grid/0/hadoop/hdfs/data");
        update.set("yarn-site", "yarn.nodemanager.local-dirs", "/grid/0/yarn/local");

        config.apply(&update);

        assert_eq!(config.property("hdfs-site", "dfs.replication"), Some("3"));
        assert_eq!(
            config.property("hdfs-site", "dfs.datanode.data.dir"),
            Some("/grid/0/hadoop/hdfs/data")
        );
        assert_eq!(
            config.property("yarn-site", "yarn.nodemanager.local-dirs"),
            Some("/grid/0/yarn/local")
        );
    }

    #[test]
    fn test_update_iter_and_len() {
        let mut update = ConfigUpdate::new();
        assert!(update.is_empty());
        update.set("b-site", "p", "1");
        update.set("a-site", "q", "2");
        update.set("a-site", "q", "3");

        let entries: Vec<_> = update.iter().collect();
        assert_eq!(entries, vec![("a-site", "q", "3"), ("b-site", "p", "1")]);
        assert_eq!(update.len(), 2);
    }

    #[test]
    fn test_update_serializes_as_config_groups() {
        let mut update = ConfigUpdate::new();
        update.set("some-site", "path_prop", "/test,/data/test");

        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"some-site": {"properties": {"path_prop": "/test,/data/test"}}})
        );
    }
}
