//! Path property descriptors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Whether a property holds one path or a comma-joined list of paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cardinality {
    Single,
    Multi,
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => f.write_str("single"),
            Self::Multi => f.write_str("multi"),
        }
    }
}

impl FromStr for Cardinality {
    type Err = PropertySpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "multi" => Ok(Self::Multi),
            other => Err(PropertySpecError::UnknownCardinality(other.to_string())),
        }
    }
}

/// Errors from parsing a [`PathPropertySpec`] descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertySpecError {
    #[error("Property spec must look like NAME:COMPONENT:BASE_PATH:single|multi, got {0:?}")]
    Format(String),

    #[error("Unknown cardinality {0:?} (expected single or multi)")]
    UnknownCardinality(String),
}

/// Describes one configuration property to populate with data paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathPropertySpec {
    pub property_name: String,
    /// Component that will write to the directory (e.g. `DATANODE`).
    pub component_name: String,
    /// Default directory, used as-is when no mount-qualified path exists.
    pub base_path: String,
    pub cardinality: Cardinality,
}

impl PathPropertySpec {
    pub fn new(
        property_name: impl Into<String>,
        component_name: impl Into<String>,
        base_path: impl Into<String>,
        cardinality: Cardinality,
    ) -> Self {
        Self {
            property_name: property_name.into(),
            component_name: component_name.into(),
            base_path: base_path.into(),
            cardinality,
        }
    }

    pub fn single(
        property_name: impl Into<String>,
        component_name: impl Into<String>,
        base_path: impl Into<String>,
    ) -> Self {
        Self::new(property_name, component_name, base_path, Cardinality::Single)
    }

    pub fn multi(
        property_name: impl Into<String>,
        component_name: impl Into<String>,
        base_path: impl Into<String>,
    ) -> Self {
        Self::new(property_name, component_name, base_path, Cardinality::Multi)
    }
}

/// Parses `NAME:COMPONENT:BASE_PATH:CARDINALITY`.
///
/// The base path may itself contain `:`; name and component are taken from
/// the front and the cardinality from the back.
impl FromStr for PathPropertySpec {
    type Err = PropertySpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_err = || PropertySpecError::Format(s.to_string());

        let (name, rest) = s.split_once(':').ok_or_else(format_err)?;
        let (component, rest) = rest.split_once(':').ok_or_else(format_err)?;
        let (base_path, cardinality) = rest.rsplit_once(':').ok_or_else(format_err)?;

        let (name, component, base_path) = (name.trim(), component.trim(), base_path.trim());
        if name.is_empty() || component.is_empty() || base_path.is_empty() {
            return Err(format_err());
        }

        Ok(Self::new(name, component, base_path, cardinality.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_spec() {
        let spec: PathPropertySpec = "dfs.datanode.data.dir:DATANODE:/hadoop/hdfs/data:multi"
            .parse()
            .unwrap();
        assert_eq!(
            spec,
            PathPropertySpec::multi("dfs.datanode.data.dir", "DATANODE", "/hadoop/hdfs/data")
        );
    }

    #[test]
    fn test_parse_spec_base_path_with_colon() {
        let spec: PathPropertySpec = "p:NAMENODE:/srv/a:b:SINGLE".parse().unwrap();
        assert_eq!(spec.base_path, "/srv/a:b");
        assert_eq!(spec.cardinality, Cardinality::Single);
    }

    #[test]
    fn test_parse_spec_errors() {
        assert!(matches!(
            "p:DATANODE".parse::<PathPropertySpec>(),
            Err(PropertySpecError::Format(_))
        ));
        assert!(matches!(
            ":DATANODE:/x:single".parse::<PathPropertySpec>(),
            Err(PropertySpecError::Format(_))
        ));
        assert_eq!(
            "p:DATANODE:/x:many".parse::<PathPropertySpec>(),
            Err(PropertySpecError::UnknownCardinality("many".to_string()))
        );
    }
}
