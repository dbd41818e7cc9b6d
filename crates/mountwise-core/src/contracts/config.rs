//! Configuration documents.
//!
//! Groups are read from `{group: {"properties": {name: value}}}`. The
//! services document wraps the same map under `"configurations"`. Groups
//! without `properties` read as empty; scalar property values other than
//! strings are kept as their JSON text and `null` values are skipped.

use serde_json::Value;

use crate::domain::ClusterConfig;
use crate::error::InventoryError;

/// Parse a services document (`{"configurations": {...}, ...}`).
///
/// Other top-level keys (stack versions, service lists) are ignored. A
/// document without `configurations` yields an empty configuration.
pub fn parse_services(json: &str) -> Result<ClusterConfig, InventoryError> {
    let value: Value = serde_json::from_str(json)?;
    services_from_value(&value)
}

pub fn services_from_value(value: &Value) -> Result<ClusterConfig, InventoryError> {
    if !value.is_object() {
        return Err(InventoryError::malformed("$", "expected a JSON object"));
    }
    match value.get("configurations") {
        None | Some(Value::Null) => Ok(ClusterConfig::new()),
        Some(configurations) => groups_from_value("configurations", configurations),
    }
}

/// Parse a bare group map (`{group: {"properties": {...}}}`).
pub fn parse_config(json: &str) -> Result<ClusterConfig, InventoryError> {
    let value: Value = serde_json::from_str(json)?;
    config_from_value(&value)
}

pub fn config_from_value(value: &Value) -> Result<ClusterConfig, InventoryError> {
    groups_from_value("$", value)
}

fn groups_from_value(location: &str, value: &Value) -> Result<ClusterConfig, InventoryError> {
    let groups = value
        .as_object()
        .ok_or_else(|| InventoryError::malformed(location, "expected a map of configuration groups"))?;

    let mut config = ClusterConfig::new();
    for (name, group) in groups {
        let group_location = format!("{location}.{name}");
        let group = group
            .as_object()
            .ok_or_else(|| InventoryError::malformed(&group_location, "expected an object"))?;

        config.ensure_group(name.as_str());

        let Some(properties) = group.get("properties") else {
            continue;
        };
        let properties = properties.as_object().ok_or_else(|| {
            InventoryError::malformed(format!("{group_location}.properties"), "expected an object")
        })?;

        for (key, value) in properties {
            if let Some(text) = property_text(value) {
                config.set_property(name.as_str(), key.as_str(), text);
            }
        }
    }
    Ok(config)
}

fn property_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_services_document() {
        let value = json!({
            "Versions": {"stack_name": "HDP", "stack_version": "2.6"},
            "services": [],
            "configurations": {
                "cluster-env": {"properties": {"agent_mounts_ignore_list": ""}},
                "some-site": {"path_prop": "/test"}
            }
        });
        let config = services_from_value(&value).unwrap();

        assert_eq!(
            config.property("cluster-env", "agent_mounts_ignore_list"),
            Some("")
        );
        // Values outside `properties` are not configuration
        assert!(config.group("some-site").is_some());
        assert_eq!(config.property("some-site", "path_prop"), None);
    }

    #[test]
    fn test_missing_configurations_is_empty() {
        let config = services_from_value(&json!({"services": []})).unwrap();
        assert!(config.is_empty());
    }

    #[test]
    fn test_non_string_values() {
        let config = config_from_value(&json!({
            "hdfs-site": {"properties": {"dfs.replication": 3, "enabled": true, "gone": null}}
        }))
        .unwrap();
        assert_eq!(config.property("hdfs-site", "dfs.replication"), Some("3"));
        assert_eq!(config.property("hdfs-site", "enabled"), Some("true"));
        assert_eq!(config.property("hdfs-site", "gone"), None);
    }

    #[test]
    fn test_malformed_group() {
        let err = config_from_value(&json!({"hdfs-site": "nope"})).unwrap_err();
        assert!(matches!(
            err,
            InventoryError::MalformedInventory { ref location, .. } if location == "$.hdfs-site"
        ));

        let err = parse_services(r#"{"configurations": []}"#).unwrap_err();
        assert!(matches!(err, InventoryError::MalformedInventory { .. }));
    }

    #[test]
    fn test_round_trip_with_serialized_config() {
        let config = ClusterConfig::new().with_property("some-site", "path_prop", "/test");
        let text = serde_json::to_string(&config).unwrap();
        assert_eq!(parse_config(&text).unwrap(), config);
    }
}
