//! Filter command handler.

use anyhow::Result;
use mountwise_core::contracts::inventory_to_value;
use serde_json::Value;

use super::{load_inputs, print_json};
use crate::bootstrap::CliContext;
use crate::commands::InputArgs;

/// Inventory document with ignored mounts removed.
pub fn build(ctx: &CliContext, inputs: &InputArgs) -> Result<Value> {
    let (inventory, services) = load_inputs(inputs)?;
    let filtered = ctx.advisor.filter(&inventory, &services);
    Ok(inventory_to_value(&filtered))
}

/// Execute the filter command.
pub fn execute(ctx: &CliContext, inputs: &InputArgs) -> Result<()> {
    print_json(&build(ctx, inputs)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::write_inputs;
    use mountwise_core::MountAdvisor;
    use serde_json::json;

    #[test]
    fn test_filter_output() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = write_inputs(dir.path(), &[("a", &["/", "/data", "/grid/0"])], "/data");
        let ctx = CliContext {
            advisor: MountAdvisor::with_defaults(),
        };

        let value = build(&ctx, &inputs).unwrap();
        assert_eq!(
            value["items"][0]["Hosts"]["disk_info"],
            json!([{"mountpoint": "/"}, {"mountpoint": "/grid/0"}])
        );
    }
}
