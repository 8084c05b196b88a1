//! Vehicle configuration (which export file feeds which report section)

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use vcds_core::MeasurementKind;

use crate::error::{ConvError, ConvResult};

/// Metadata about the vehicle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Vehicle model, e.g. "Golf 7 Clubsport"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One configured control module
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleConfig {
    /// Cleaned export file name, relative to the data directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Report section; inferred from the file name when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<MeasurementKind>,
}

impl ModuleConfig {
    /// Section this module's measurements belong to, if known
    pub fn resolved_kind(&self) -> Option<MeasurementKind> {
        self.kind
            .or_else(|| self.file.as_deref().and_then(MeasurementKind::from_file_name))
    }
}

/// Vehicle configuration file
///
/// ```yaml
/// meta:
///   name: Golf 7 Clubsport
/// modules:
///   engine:
///     file: 01_engine_blockmap.csv
///   engine_adaptation:
///     file: 01_engine_adapt.csv
///     kind: adaptation
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ConfigMeta>,
    /// Modules in file order
    #[serde(default)]
    pub modules: IndexMap<String, ModuleConfig>,
}

impl VehicleConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> ConvResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConvError::io(path, e))?;
        Self::from_yaml(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> ConvResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Display name for reports
    pub fn display_name(&self) -> Option<&str> {
        let meta = self.meta.as_ref()?;
        meta.vehicle.as_deref().or(meta.name.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_yaml_keeps_module_order() {
        let yaml = r#"
meta:
  name: golf7_cs
  vehicle: Golf 7 Clubsport

modules:
  engine:
    file: 01_engine_blockmap.csv
  gearbox:
    file: 02_gearbox.csv
  engine_adaptation:
    file: 01_engine_adapt.csv
    kind: adaptation
  brakes: {}
"#;
        let config = VehicleConfig::from_yaml(yaml).unwrap();
        let names: Vec<&str> = config.modules.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["engine", "gearbox", "engine_adaptation", "brakes"]);

        assert_eq!(config.display_name(), Some("Golf 7 Clubsport"));
        assert_eq!(
            config.modules["engine"].resolved_kind(),
            Some(MeasurementKind::Blockmap)
        );
        assert_eq!(config.modules["gearbox"].resolved_kind(), None);
        assert_eq!(
            config.modules["engine_adaptation"].resolved_kind(),
            Some(MeasurementKind::Adaptation)
        );
        assert_eq!(config.modules["brakes"].file, None);
    }

    #[test]
    fn test_empty_config() {
        let config = VehicleConfig::from_yaml("meta:\n  name: x\n").unwrap();
        assert!(config.modules.is_empty());
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(matches!(
            VehicleConfig::from_yaml("modules: [1, 2"),
            Err(ConvError::YamlError(_))
        ));
    }
}
