//! CLI bootstrap - the composition root.
//!
//! Loads settings and builds the `MountAdvisor` every handler uses.

use std::fs;
use std::path::Path;

use mountwise_core::{AdvisorSettings, MountAdvisor};
use tracing::debug;

use crate::error::CliError;

/// Dependencies shared by all command handlers.
#[derive(Debug, Clone)]
pub struct CliContext {
    pub advisor: MountAdvisor,
}

/// Read settings from a JSON file, or use defaults when no file is given.
pub fn load_settings(path: Option<&Path>) -> Result<AdvisorSettings, CliError> {
    let Some(path) = path else {
        return Ok(AdvisorSettings::with_defaults());
    };

    let text = fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
    let settings: AdvisorSettings = serde_json::from_str(&text)
        .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?;

    debug!(path = %path.display(), "Loaded advisor settings");
    Ok(settings)
}

/// Build the CLI context from an optional settings file.
pub fn bootstrap(settings_path: Option<&Path>) -> Result<CliContext, CliError> {
    let settings = load_settings(settings_path)?;
    let advisor = MountAdvisor::new(settings)?;
    Ok(CliContext { advisor })
}
