//! Mount advisor - runs the filter, variation and update steps in order
//! under one set of validated settings.

use tracing::debug;

use crate::domain::{ClusterConfig, ConfigUpdate, HostInventory, PathPropertySpec};
use crate::mounts::{IgnoreSet, ReservedPrefixSet, VariationGenerator, filter_with_ignore_set};
use crate::services::PropertyUpdater;
use crate::settings::{AdvisorSettings, SettingsError, validate_settings};

/// Entry point for adapters that want settings-aware recommendations.
#[derive(Debug, Clone)]
pub struct MountAdvisor {
    settings: AdvisorSettings,
    reserved: ReservedPrefixSet,
}

impl Default for MountAdvisor {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl MountAdvisor {
    /// Create an advisor, validating `settings` first.
    pub fn new(settings: AdvisorSettings) -> Result<Self, SettingsError> {
        validate_settings(&settings)?;
        let reserved = settings.reserved_prefix_set();
        debug!(
            reserved = reserved.prefixes().count(),
            policy = ?settings.effective_selection_policy(),
            "Mount advisor configured"
        );
        Ok(Self { settings, reserved })
    }

    /// Advisor with built-in reserved prefixes and first-discovered selection.
    pub fn with_defaults() -> Self {
        Self {
            settings: AdvisorSettings::with_defaults(),
            reserved: ReservedPrefixSet::builtin(),
        }
    }

    pub const fn settings(&self) -> &AdvisorSettings {
        &self.settings
    }

    pub const fn reserved(&self) -> &ReservedPrefixSet {
        &self.reserved
    }

    /// The ignore set in effect: the settings override if present, else the
    /// cluster's `agent_mounts_ignore_list`.
    pub fn ignore_set(&self, services: &ClusterConfig) -> IgnoreSet {
        self.settings
            .ignore_override()
            .unwrap_or_else(|| IgnoreSet::from_config(services))
    }

    /// Drop ignored mounts from `inventory`.
    pub fn filter(&self, inventory: &HostInventory, services: &ClusterConfig) -> HostInventory {
        filter_with_ignore_set(inventory, &self.ignore_set(services))
    }

    /// Path variations of `base_path` over an (ideally filtered) inventory.
    pub fn variations(
        &self,
        base_path: &str,
        component_name: &str,
        services: &ClusterConfig,
        inventory: &HostInventory,
    ) -> Vec<String> {
        let ignore = self.ignore_set(services);
        VariationGenerator::new(&self.reserved, &ignore).variations(
            base_path,
            component_name,
            inventory,
        )
    }

    /// Filter `inventory`, then recommend values for `specs` in `group`.
    pub fn recommend(
        &self,
        group: &str,
        specs: &[PathPropertySpec],
        target: &ClusterConfig,
        services: &ClusterConfig,
        inventory: &HostInventory,
    ) -> ConfigUpdate {
        let ignore = self.ignore_set(services);
        let cleaned = filter_with_ignore_set(inventory, &ignore);
        let generator = VariationGenerator::new(&self.reserved, &ignore);

        PropertyUpdater::new(generator, self.settings.effective_selection_policy())
            .recommend(group, specs, target, services, &cleaned)
    }
}
