//! Property updater - turns path variations into configuration values.
//!
//! For each [`PathPropertySpec`] the updater resolves the property's current
//! value, asks the [`VariationGenerator`] for mount-qualified alternatives and
//! formats the result according to the property's [`Cardinality`].
//!
//! Values are returned as a [`ConfigUpdate`]; nothing is mutated unless the
//! caller merges it (or uses [`update_mount_properties`]).

use tracing::info;

use crate::domain::{Cardinality, ClusterConfig, ConfigUpdate, HostInventory, PathPropertySpec};
use crate::mounts::{IgnoreSet, MountVariation, ReservedPrefixSet, VariationGenerator};
use crate::settings::SelectionPolicy;
use crate::utils::{join_mount_path, strip_mount};

/// Computes recommended values for path properties.
#[derive(Debug, Clone, Copy)]
pub struct PropertyUpdater<'a> {
    generator: VariationGenerator<'a>,
    policy: SelectionPolicy,
}

impl<'a> PropertyUpdater<'a> {
    pub const fn new(generator: VariationGenerator<'a>, policy: SelectionPolicy) -> Self {
        Self { generator, policy }
    }

    /// Recommend values for every spec in `group`.
    ///
    /// `target` is the configuration being built (its values win when
    /// resolving the current value); `services` carries the existing cluster
    /// configuration, including `cluster-env`.
    pub fn recommend(
        &self,
        group: &str,
        specs: &[PathPropertySpec],
        target: &ClusterConfig,
        services: &ClusterConfig,
        inventory: &HostInventory,
    ) -> ConfigUpdate {
        let mut update = ConfigUpdate::new();
        for spec in specs {
            let value = self.recommend_value(group, spec, target, services, inventory);
            update.set(group, spec.property_name.as_str(), value);
        }
        update
    }

    /// Recommend the value of a single property.
    pub fn recommend_value(
        &self,
        group: &str,
        spec: &PathPropertySpec,
        target: &ClusterConfig,
        services: &ClusterConfig,
        inventory: &HostInventory,
    ) -> String {
        let base = spec.base_path.trim();
        let current = current_value(group, spec, target, services);

        let variations = self
            .generator
            .mount_variations(base, &spec.component_name, inventory);

        let value = match spec.cardinality {
            Cardinality::Single => self
                .select_single(variations.iter().map(|v| v.path.as_str()))
                .map_or_else(|| current.clone(), str::to_string),
            Cardinality::Multi => {
                let paths = if current == base {
                    variations.iter().map(|v| v.path.clone()).collect()
                } else {
                    rewrite_against(&current, &variations)
                };
                join_multi(&current, &paths)
            }
        };

        info!(
            group,
            property = %spec.property_name,
            component = %spec.component_name,
            cardinality = %spec.cardinality,
            mounts = variations.len(),
            value = %value,
            "Recommended data path"
        );
        value
    }

    fn select_single<'p>(&self, mut paths: impl Iterator<Item = &'p str>) -> Option<&'p str> {
        match self.policy {
            SelectionPolicy::FirstDiscovered => paths.next(),
            SelectionPolicy::Lexical => paths.min(),
        }
    }
}

/// Value already set in `target`, else in `services`, else the base path.
fn current_value(
    group: &str,
    spec: &PathPropertySpec,
    target: &ClusterConfig,
    services: &ClusterConfig,
) -> String {
    target
        .property(group, &spec.property_name)
        .or_else(|| services.property(group, &spec.property_name))
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| spec.base_path.trim())
        .to_string()
}

/// Re-anchor each variation on the trailing path of the current value's
/// first entry.
///
/// The trailing path is the part below a uniform mount when the entry lives
/// under one (so a previous recommendation maps back onto itself), otherwise
/// the whole entry.
fn rewrite_against(current: &str, variations: &[MountVariation]) -> Vec<String> {
    let first = split_entries(current).next().unwrap_or(current);
    let anchor = variations
        .iter()
        .filter_map(|v| strip_mount(first, &v.mountpoint))
        .filter(|rest| !rest.is_empty())
        .min_by_key(|rest| rest.len())
        .unwrap_or(first);

    let mut paths: Vec<String> = Vec::with_capacity(variations.len());
    for variation in variations {
        let path = join_mount_path(&variation.mountpoint, anchor);
        if !paths.contains(&path) {
            paths.push(path);
        }
    }
    paths
}

/// Current entries first, then new paths, without duplicates.
fn join_multi(current: &str, paths: &[String]) -> String {
    let mut entries: Vec<&str> = Vec::new();
    for entry in split_entries(current).chain(paths.iter().map(String::as_str)) {
        if !entries.contains(&entry) {
            entries.push(entry);
        }
    }
    entries.join(",")
}

fn split_entries(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|e| !e.is_empty())
}

/// Recommend mount-aware values for `specs` using the built-in reserved
/// prefixes, the ignore list from `services` and first-discovered selection.
pub fn recommend_mount_properties(
    group: &str,
    specs: &[PathPropertySpec],
    target: &ClusterConfig,
    services: &ClusterConfig,
    inventory: &HostInventory,
) -> ConfigUpdate {
    let reserved = ReservedPrefixSet::builtin();
    let ignore = IgnoreSet::from_config(services);
    PropertyUpdater::new(
        VariationGenerator::new(&reserved, &ignore),
        SelectionPolicy::default(),
    )
    .recommend(group, specs, target, services, inventory)
}

/// Compute recommendations and merge them into `target` in place.
///
/// # Examples
///
/// ```rust
/// use mountwise_core::services::update_mount_properties;
/// use mountwise_core::{ClusterConfig, Host, HostInventory, PathPropertySpec};
///
/// let inventory = HostInventory::from_hosts(vec![
///     Host::new("c6401").with_mounts(["/", "/data"]),
///     Host::new("c6402").with_mounts(["/", "/data"]),
/// ]);
/// let specs = [PathPropertySpec::multi("path_prop", "DATANODE", "/test")];
///
/// let mut target = ClusterConfig::new();
/// update_mount_properties("some-site", &specs, &mut target, &ClusterConfig::new(), &inventory);
/// assert_eq!(target.property("some-site", "path_prop"), Some("/test,/data/test"));
/// ```
pub fn update_mount_properties(
    group: &str,
    specs: &[PathPropertySpec],
    target: &mut ClusterConfig,
    services: &ClusterConfig,
    inventory: &HostInventory,
) {
    let update = recommend_mount_properties(group, specs, target, services, inventory);
    target.apply(&update);
}
