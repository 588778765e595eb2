//! Configuration file loading for speclint.
//!
//! A configuration is a YAML (or JSON) file with a `rules` table and an
//! optional list of `presets`. Every rule is disabled unless its entry is
//! set. Presets fill in entries the file leaves unset; anything written
//! explicitly in the file wins.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Top-level speclint configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rules: Rules,
    #[serde(default)]
    pub presets: Vec<String>,
}

/// Per-rule settings. `None` means the rule is disabled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rules {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub naming: Option<NamingOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_empty_operation_id: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_empty_descriptions: Option<NoEmptyDescriptionsOptions>,
    /// `true` requires every path to end with `/`, `false` forbids it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slash_terminated_paths: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_operation_tags: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_unused_definitions: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_duplicate_operation_ids: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_missing_required_properties: Option<bool>,
}

/// Naming convention per node category. Values are convention names such
/// as `PascalCase` or `kebab-case`; they are resolved when the naming rule
/// is registered, so a typo fails the run instead of disabling the check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamingOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paths: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operations: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definitions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoEmptyDescriptionsOptions {
    #[serde(default)]
    pub ignore_properties: bool,
    #[serde(default)]
    pub ignore_operations: bool,
    #[serde(default)]
    pub ignore_parameters: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Names accepted in the `presets` list.
pub const PRESET_NAMES: &[&str] = &["standard"];

/// Look up a named preset.
pub fn preset(name: &str) -> Option<Rules> {
    match name {
        "standard" => Some(standard_preset()),
        _ => None,
    }
}

fn standard_preset() -> Rules {
    Rules {
        no_empty_descriptions: Some(NoEmptyDescriptionsOptions {
            ignore_properties: true,
            ignore_operations: false,
            ignore_parameters: true,
        }),
        no_empty_operation_id: Some(true),
        require_operation_tags: Some(true),
        naming: Some(NamingOptions {
            definitions: Some("PascalCase".to_string()),
            tags: Some("camelCase".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

impl NamingOptions {
    /// Fill every unset category from `defaults`.
    fn fill_from(&mut self, defaults: &NamingOptions) {
        fn fill(slot: &mut Option<String>, default: &Option<String>) {
            if slot.is_none() {
                slot.clone_from(default);
            }
        }
        fill(&mut self.paths, &defaults.paths);
        fill(&mut self.tags, &defaults.tags);
        fill(&mut self.operations, &defaults.operations);
        fill(&mut self.parameters, &defaults.parameters);
        fill(&mut self.definitions, &defaults.definitions);
        fill(&mut self.properties, &defaults.properties);
    }
}

impl Rules {
    /// Merge `defaults` underneath these rules: a field already set here is
    /// kept, an unset field takes the default.
    pub fn fill_from(&mut self, defaults: &Rules) {
        if let Some(naming) = self.naming.as_mut() {
            if let Some(default) = &defaults.naming {
                naming.fill_from(default);
            }
        } else {
            self.naming.clone_from(&defaults.naming);
        }
        if self.no_empty_descriptions.is_none() {
            self.no_empty_descriptions
                .clone_from(&defaults.no_empty_descriptions);
        }
        self.no_empty_operation_id = self.no_empty_operation_id.or(defaults.no_empty_operation_id);
        self.slash_terminated_paths = self
            .slash_terminated_paths
            .or(defaults.slash_terminated_paths);
        self.require_operation_tags = self
            .require_operation_tags
            .or(defaults.require_operation_tags);
        self.no_unused_definitions = self.no_unused_definitions.or(defaults.no_unused_definitions);
        self.no_duplicate_operation_ids = self
            .no_duplicate_operation_ids
            .or(defaults.no_duplicate_operation_ids);
        self.no_missing_required_properties = self
            .no_missing_required_properties
            .or(defaults.no_missing_required_properties);
    }
}

impl Config {
    /// Parse a configuration from YAML (or JSON) text and merge its presets.
    pub fn from_yaml_str(text: &str, origin: &str) -> Result<Self, ConfigError> {
        // An empty file is a valid, empty configuration.
        let mut config: Config = if text.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(text).map_err(|source| ConfigError::Parse {
                origin: origin.to_string(),
                source,
            })?
        };
        config.apply_presets();
        Ok(config)
    }

    /// Load and resolve a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text, &path.display().to_string())
    }

    /// Merge every listed preset underneath the explicit rules, in list order.
    /// Unknown preset names are logged and skipped.
    pub fn apply_presets(&mut self) {
        for name in &self.presets {
            match preset(name) {
                Some(defaults) => {
                    tracing::debug!(preset = %name, "merging preset");
                    self.rules.fill_from(&defaults);
                }
                None => {
                    tracing::warn!(
                        preset = %name,
                        known = ?PRESET_NAMES,
                        "no preset named {name}, skipping"
                    );
                }
            }
        }
    }
}
