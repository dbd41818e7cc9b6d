//! Command handlers.
//!
//! Each handler builds its JSON output in a `build` function and prints it
//! from `execute`, so output can be tested without capturing stdout.

pub mod filter;
pub mod recommend;
pub mod variations;

use std::fs;
use std::path::Path;

use anyhow::Result;
use mountwise_core::contracts::{parse_config, parse_inventory, parse_services};
use mountwise_core::{ClusterConfig, HostInventory};
use serde_json::Value;

use crate::commands::InputArgs;
use crate::error::CliError;

fn read_document(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|e| CliError::Io(format!("{}: {e}", path.display())))
}

/// Read and validate the inventory and services documents.
fn load_inputs(inputs: &InputArgs) -> Result<(HostInventory, ClusterConfig), CliError> {
    let inventory = parse_inventory(&read_document(&inputs.hosts)?)?;
    let services = parse_services(&read_document(&inputs.services)?)?;
    Ok((inventory, services))
}

fn load_config(path: &Path) -> Result<ClusterConfig, CliError> {
    Ok(parse_config(&read_document(path)?)?)
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
