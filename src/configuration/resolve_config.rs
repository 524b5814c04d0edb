use std::collections::HashSet;

use anyhow::bail;
use anyhow::Result;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::deserialize_config;
use super::ConfigKeyMap;
use super::ConfigMap;
use super::ConfigMapValue;
use super::OverrideRule;

/// The formatter configuration resolved from a configuration file.
///
/// Top-level options apply to every file; override rules replace them
/// for the files their patterns match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormatterConfiguration {
  #[serde(default)]
  pub plugins: Vec<String>,
  #[serde(flatten)]
  pub base_options: ConfigKeyMap,
  #[serde(default)]
  pub overrides: Vec<OverrideRule>,
}

#[derive(Debug, Error)]
pub enum ConfigFileError {
  #[error("Error deserializing. {0}")]
  Deserialize(String),
  #[error(transparent)]
  Other(#[from] anyhow::Error),
}

impl FormatterConfiguration {
  /// Resolves a configuration from JSONC file text.
  pub fn from_config_text(config_file_text: &str) -> Result<FormatterConfiguration, ConfigFileError> {
    let config_map = deserialize_config(config_file_text).map_err(ConfigFileError::Deserialize)?;
    Ok(resolve_config(config_map)?)
  }

  pub fn to_json_text(&self) -> Result<String> {
    Ok(serde_json::to_string_pretty(self)?)
  }
}

/// Resolves an unresolved config map to a `FormatterConfiguration`.
pub fn resolve_config(config_map: ConfigMap) -> Result<FormatterConfiguration> {
  let mut config_map = config_map;
  let plugins = filter_duplicate_plugins(take_plugins_from_config_map(&mut config_map)?);
  let overrides = take_overrides_from_config_map(&mut config_map)?;

  // every remaining scalar property is a top-level option
  let mut base_options = ConfigKeyMap::new();
  for (key, value) in config_map {
    match value {
      ConfigMapValue::KeyValue(value) => {
        base_options.insert(key, value);
      }
      ConfigMapValue::Vec(_) | ConfigMapValue::Overrides(_) => bail!("Unexpected array in '{}' property.", key),
    }
  }

  Ok(FormatterConfiguration {
    plugins,
    base_options,
    overrides,
  })
}

fn take_plugins_from_config_map(config_map: &mut ConfigMap) -> Result<Vec<String>> {
  match config_map.shift_remove("plugins") {
    Some(ConfigMapValue::Vec(plugins)) => {
      for plugin in &plugins {
        if plugin.trim().is_empty() {
          bail!("Expected a non-empty string in 'plugins' property.");
        }
      }
      Ok(plugins)
    }
    Some(_) => bail!("Expected an array of strings in 'plugins' property."),
    None => Ok(Vec::new()),
  }
}

fn take_overrides_from_config_map(config_map: &mut ConfigMap) -> Result<Vec<OverrideRule>> {
  let overrides = match config_map.shift_remove("overrides") {
    Some(ConfigMapValue::Overrides(overrides)) => overrides,
    Some(_) => bail!("Expected an array of objects in 'overrides' property."),
    None => Vec::new(),
  };

  for rule in &overrides {
    if rule.files.patterns().is_empty() {
      bail!("Expected at least one pattern in 'overrides -> files'.");
    }
    for pattern in rule.files.patterns() {
      if pattern.trim().is_empty() {
        bail!("Expected a non-empty pattern in 'overrides -> files'.");
      }
    }
  }

  Ok(overrides)
}

fn filter_duplicate_plugins(plugins: Vec<String>) -> Vec<String> {
  let mut plugin_name_set = HashSet::new();

  plugins.into_iter().filter(|plugin| plugin_name_set.insert(plugin.clone())).collect()
}
