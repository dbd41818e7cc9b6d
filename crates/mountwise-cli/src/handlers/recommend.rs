//! Recommend command handler.

use std::path::Path;

use anyhow::Result;
use mountwise_core::{ClusterConfig, PathPropertySpec};
use serde_json::Value;
use tracing::debug;

use super::{load_config, load_inputs, print_json};
use crate::bootstrap::CliContext;
use crate::commands::InputArgs;
use crate::error::CliError;

/// Options of the recommend command.
#[derive(Debug, Clone, Copy)]
pub struct RecommendOptions<'a> {
    pub group: &'a str,
    pub specs: &'a [PathPropertySpec],
    pub config: Option<&'a Path>,
    pub merged: bool,
}

/// Parse `NAME:COMPONENT:BASE_PATH:single|multi` descriptors.
pub fn parse_specs(descriptors: &[String]) -> Result<Vec<PathPropertySpec>, CliError> {
    descriptors
        .iter()
        .map(|descriptor| descriptor.parse::<PathPropertySpec>().map_err(CliError::from))
        .collect()
}

/// The recommendation as a configuration update, or the merged target
/// configuration when `merged` is set.
pub fn build(ctx: &CliContext, inputs: &InputArgs, options: RecommendOptions<'_>) -> Result<Value> {
    let (inventory, services) = load_inputs(inputs)?;
    let mut target = match options.config {
        Some(path) => load_config(path)?,
        None => ClusterConfig::new(),
    };

    let update = ctx
        .advisor
        .recommend(options.group, options.specs, &target, &services, &inventory);
    debug!(properties = update.len(), group = options.group, "Computed recommendations");

    if options.merged {
        target.apply(&update);
        Ok(serde_json::to_value(&target)?)
    } else {
        Ok(serde_json::to_value(&update)?)
    }
}

/// Execute the recommend command.
pub fn execute(ctx: &CliContext, inputs: &InputArgs, options: RecommendOptions<'_>) -> Result<()> {
    print_json(&build(ctx, inputs, options)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::write_inputs;
    use mountwise_core::MountAdvisor;
    use serde_json::json;
    use std::fs;

    fn ctx() -> CliContext {
        CliContext {
            advisor: MountAdvisor::with_defaults(),
        }
    }

    #[test]
    fn test_recommend_update() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = write_inputs(
            dir.path(),
            &[
                ("c6401", &["/", "/dev/shm", "/vagrant", "/data"]),
                ("c6402", &["/", "/me", "/dev/shm1", "/vagrant1", "/data"]),
            ],
            "",
        );
        let specs = [PathPropertySpec::multi("path_prop", "DATANODE", "/test")];

        let value = build(
            &ctx(),
            &inputs,
            RecommendOptions {
                group: "some-site",
                specs: &specs,
                config: None,
                merged: false,
            },
        )
        .unwrap();

        assert_eq!(
            value,
            json!({"some-site": {"properties": {"path_prop": "/test,/data/test"}}})
        );
    }

    #[test]
    fn test_parse_specs() {
        let specs = parse_specs(&[
            "dfs.datanode.data.dir:DATANODE:/hadoop/hdfs/data:multi".to_string(),
            "dfs.namenode.name.dir:NAMENODE:/hadoop/hdfs/namenode:single".to_string(),
        ])
        .unwrap();
        assert_eq!(
            specs[0],
            PathPropertySpec::multi("dfs.datanode.data.dir", "DATANODE", "/hadoop/hdfs/data")
        );
        assert_eq!(specs[1].cardinality, mountwise_core::Cardinality::Single);
    }

    #[test]
    fn test_bad_spec_is_usage_error() {
        let err = parse_specs(&["dir:NAMENODE:/nn:several".to_string()]).unwrap_err();
        assert!(matches!(err, CliError::Arguments(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_recommend_merged_keeps_existing_config() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = write_inputs(dir.path(), &[("a", &["/grid/0"]), ("b", &["/grid/0"])], "");
        let config_path = dir.path().join("config.json");
        fs::write(
            &config_path,
            json!({"hdfs-site": {"properties": {"dfs.replication": "3"}}}).to_string(),
        )
        .unwrap();
        let specs = [PathPropertySpec::single("dfs.namenode.name.dir", "NAMENODE", "/nn")];

        let value = build(
            &ctx(),
            &inputs,
            RecommendOptions {
                group: "hdfs-site",
                specs: &specs,
                config: Some(&config_path),
                merged: true,
            },
        )
        .unwrap();

        assert_eq!(
            value,
            json!({"hdfs-site": {"properties": {
                "dfs.replication": "3",
                "dfs.namenode.name.dir": "/grid/0/nn"
            }}})
        );
    }
}
