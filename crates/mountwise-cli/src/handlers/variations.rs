//! Variations command handler.

use anyhow::Result;
use serde_json::{Value, json};

use super::{load_inputs, print_json};
use crate::bootstrap::CliContext;
use crate::commands::InputArgs;

/// Variations of `base` over the filtered inventory, as a JSON list.
pub fn build(ctx: &CliContext, inputs: &InputArgs, base: &str, component: &str) -> Result<Value> {
    let (inventory, services) = load_inputs(inputs)?;
    let filtered = ctx.advisor.filter(&inventory, &services);
    let variations = ctx.advisor.variations(base, component, &services, &filtered);
    Ok(json!(variations))
}

/// Execute the variations command.
pub fn execute(ctx: &CliContext, inputs: &InputArgs, base: &str, component: &str) -> Result<()> {
    print_json(&build(ctx, inputs, base, component)?)
}
