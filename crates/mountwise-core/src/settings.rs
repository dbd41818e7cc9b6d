//! Advisor settings and validation.
//!
//! These are pure domain types; loading them from disk is the adapter's job.

use serde::{Deserialize, Serialize};

use crate::mounts::{IgnoreSet, ReservedPrefixSet};

/// How a `single` property picks one path among several uniform mounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// First mount in inventory order.
    #[default]
    FirstDiscovered,
    /// Lexically smallest mount-qualified path.
    Lexical,
}

/// Advisor settings structure.
///
/// All fields are optional so a settings file only names what it changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AdvisorSettings {
    /// Selection policy for single-path properties.
    pub selection_policy: Option<SelectionPolicy>,

    /// Prefixes reserved in addition to the built-in set (e.g. `/tmp`).
    pub extra_reserved_prefixes: Option<Vec<String>>,

    /// Comma-separated ignore list used instead of the cluster's
    /// `agent_mounts_ignore_list`.
    pub ignore_list_override: Option<String>,
}

impl AdvisorSettings {
    /// Create settings with sensible defaults.
    #[must_use]
    pub const fn with_defaults() -> Self {
        Self {
            selection_policy: Some(SelectionPolicy::FirstDiscovered),
            extra_reserved_prefixes: None,
            ignore_list_override: None,
        }
    }

    /// Get the effective selection policy (with default fallback).
    #[must_use]
    pub fn effective_selection_policy(&self) -> SelectionPolicy {
        self.selection_policy.unwrap_or_default()
    }

    /// Built-in reserved prefixes plus any configured extras.
    pub fn reserved_prefix_set(&self) -> ReservedPrefixSet {
        let base = ReservedPrefixSet::builtin();
        match self.extra_reserved_prefixes {
            Some(ref extra) => base.with_extra(extra),
            None => base,
        }
    }

    /// Parsed override ignore list, if one is configured.
    pub fn ignore_override(&self) -> Option<IgnoreSet> {
        self.ignore_list_override.as_deref().map(IgnoreSet::parse)
    }
}

/// Settings validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("Reserved prefix cannot be empty")]
    EmptyReservedPrefix,

    #[error("Reserved prefix must be an absolute path, got {0:?}")]
    RelativeReservedPrefix(String),

    #[error("Ignore list entries must be absolute paths, got {0:?}")]
    RelativeIgnoreEntry(String),
}

/// Validate settings values.
pub fn validate_settings(settings: &AdvisorSettings) -> Result<(), SettingsError> {
    if let Some(ref prefixes) = settings.extra_reserved_prefixes {
        for prefix in prefixes {
            let prefix = prefix.trim();
            if prefix.is_empty() {
                return Err(SettingsError::EmptyReservedPrefix);
            }
            if !prefix.starts_with('/') {
                return Err(SettingsError::RelativeReservedPrefix(prefix.to_string()));
            }
        }
    }

    // An empty override is allowed and means "ignore nothing"
    if let Some(ignore) = settings.ignore_override() {
        if let Some(entry) = ignore.iter().find(|e| !e.starts_with('/')) {
            return Err(SettingsError::RelativeIgnoreEntry(entry.to_string()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AdvisorSettings::with_defaults();
        assert_eq!(
            settings.effective_selection_policy(),
            SelectionPolicy::FirstDiscovered
        );
        assert!(validate_settings(&settings).is_ok());
        assert_eq!(settings.reserved_prefix_set(), ReservedPrefixSet::builtin());
    }

    #[test]
    fn test_deserialize_partial() {
        let settings: AdvisorSettings =
            serde_json::from_str(r#"{"selection_policy": "lexical"}"#).unwrap();
        assert_eq!(settings.effective_selection_policy(), SelectionPolicy::Lexical);
        assert!(settings.extra_reserved_prefixes.is_none());
    }

    #[test]
    fn test_reserved_prefix_set_includes_extras() {
        let settings = AdvisorSettings {
            extra_reserved_prefixes: Some(vec!["/tmp".to_string()]),
            ..AdvisorSettings::with_defaults()
        };
        let set = settings.reserved_prefix_set();
        assert!(set.is_reserved("/tmp/scratch"));
        assert!(set.is_reserved("/boot"));
    }

    #[test]
    fn test_validate_rejects_bad_prefixes() {
        let mut settings = AdvisorSettings::with_defaults();

        settings.extra_reserved_prefixes = Some(vec![" ".to_string()]);
        assert_eq!(
            validate_settings(&settings),
            Err(SettingsError::EmptyReservedPrefix)
        );

        settings.extra_reserved_prefixes = Some(vec!["mnt".to_string()]);
        assert_eq!(
            validate_settings(&settings),
            Err(SettingsError::RelativeReservedPrefix("mnt".to_string()))
        );
    }

    #[test]
    fn test_validate_ignore_override() {
        let mut settings = AdvisorSettings::with_defaults();
        settings.ignore_list_override = Some(String::new());
        assert!(validate_settings(&settings).is_ok());

        settings.ignore_list_override = Some("/data, grid".to_string());
        assert_eq!(
            validate_settings(&settings),
            Err(SettingsError::RelativeIgnoreEntry("grid".to_string()))
        );
    }
}
