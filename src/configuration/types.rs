use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

/// A single option value as it appears in a configuration file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigKeyValue {
  Bool(bool),
  Number(i64),
  String(String),
}

impl ConfigKeyValue {
  pub fn from_i64(value: i64) -> ConfigKeyValue {
    ConfigKeyValue::Number(value)
  }

  pub fn from_bool(value: bool) -> ConfigKeyValue {
    ConfigKeyValue::Bool(value)
  }

  pub fn from_str(value: &str) -> ConfigKeyValue {
    ConfigKeyValue::String(value.to_string())
  }
}

/// Option names to option values, in declaration order.
pub type ConfigKeyMap = IndexMap<String, ConfigKeyValue>;

/// The glob pattern(s) an override rule applies to. The configuration
/// file accepts a single pattern or an array of patterns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OverrideFiles {
  Single(String),
  List(Vec<String>),
}

impl OverrideFiles {
  pub fn patterns(&self) -> &[String] {
    match self {
      OverrideFiles::Single(pattern) => std::slice::from_ref(pattern),
      OverrideFiles::List(patterns) => patterns,
    }
  }
}

/// A rule applying a set of options to the files matching a glob pattern.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OverrideRule {
  pub files: OverrideFiles,
  #[serde(default)]
  pub options: ConfigKeyMap,
}

/// Unresolved configuration values.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigMapValue {
  KeyValue(ConfigKeyValue),
  Vec(Vec<String>),
  Overrides(Vec<OverrideRule>),
}

impl ConfigMapValue {
  #[cfg(test)]
  pub fn from_i64(value: i64) -> ConfigMapValue {
    ConfigMapValue::KeyValue(ConfigKeyValue::from_i64(value))
  }

  #[cfg(test)]
  pub fn from_bool(value: bool) -> ConfigMapValue {
    ConfigMapValue::KeyValue(ConfigKeyValue::from_bool(value))
  }

  #[cfg(test)]
  pub fn from_str(value: &str) -> ConfigMapValue {
    ConfigMapValue::KeyValue(ConfigKeyValue::from_str(value))
  }
}

pub type ConfigMap = IndexMap<String, ConfigMapValue>;

/// Represents a problem within the configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationDiagnostic {
  /// The property name the problem occurred on.
  pub property_name: String,
  /// The diagnostic message that should be displayed to the user.
  pub message: String,
}
