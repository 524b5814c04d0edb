use serde::Deserialize;
use serde::Serialize;

use super::ConfigKeyMap;
use super::ConfigKeyValue;
use super::ConfigurationDiagnostic;

/// Typed formatting options resolved from an option map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatOptions {
  /// Compiler version pin forwarded to the language plugin.
  pub compiler: Option<String>,
  pub bracket_spacing: bool,
  pub print_width: u32,
  pub tab_width: u8,
}

pub const DEFAULT_FORMAT_OPTIONS: DefaultFormatOptions = DefaultFormatOptions {
  bracket_spacing: true,
  print_width: 80,
  tab_width: 2,
};

/// The options the formatting tool uses when a file has no
/// configured value for them.
pub struct DefaultFormatOptions {
  pub bracket_spacing: bool,
  pub print_width: u32,
  pub tab_width: u8,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResolveOptionsResult {
  /// The configuration diagnostics.
  pub diagnostics: Vec<ConfigurationDiagnostic>,
  /// The typed options derived from the option map.
  pub options: FormatOptions,
}

/// Resolves an option map to typed `FormatOptions`.
///
/// A value of the wrong type and an unknown option name each produce a
/// diagnostic rather than an error; the default value is used in place
/// of an unresolvable one.
pub fn resolve_options(option_map: ConfigKeyMap) -> ResolveOptionsResult {
  let mut option_map = option_map;
  let mut diagnostics = Vec::new();

  let options = FormatOptions {
    compiler: get_nullable_value(&mut option_map, "compiler", &mut diagnostics),
    bracket_spacing: get_value(&mut option_map, "bracketSpacing", DEFAULT_FORMAT_OPTIONS.bracket_spacing, &mut diagnostics),
    print_width: get_value(&mut option_map, "printWidth", DEFAULT_FORMAT_OPTIONS.print_width, &mut diagnostics),
    tab_width: get_value(&mut option_map, "tabWidth", DEFAULT_FORMAT_OPTIONS.tab_width, &mut diagnostics),
  };

  diagnostics.extend(get_unknown_property_diagnostics(option_map));

  ResolveOptionsResult { diagnostics, options }
}

/// A value that can be resolved from a configuration option value.
pub trait FromConfigValue: Sized {
  fn from_config_value(value: &ConfigKeyValue) -> Result<Self, String>;
}

impl FromConfigValue for String {
  fn from_config_value(value: &ConfigKeyValue) -> Result<String, String> {
    match value {
      ConfigKeyValue::String(value) => Ok(value.clone()),
      _ => Err(String::from("Expected a string value.")),
    }
  }
}

impl FromConfigValue for bool {
  fn from_config_value(value: &ConfigKeyValue) -> Result<bool, String> {
    match value {
      ConfigKeyValue::Bool(value) => Ok(*value),
      _ => Err(String::from("Expected a boolean value.")),
    }
  }
}

impl FromConfigValue for u32 {
  fn from_config_value(value: &ConfigKeyValue) -> Result<u32, String> {
    match value {
      ConfigKeyValue::Number(value) => u32::try_from(*value).map_err(|_| String::from("Expected a non-negative integer value.")),
      _ => Err(String::from("Expected a non-negative integer value.")),
    }
  }
}

impl FromConfigValue for u8 {
  fn from_config_value(value: &ConfigKeyValue) -> Result<u8, String> {
    match value {
      ConfigKeyValue::Number(value) => u8::try_from(*value).map_err(|_| String::from("Expected a non-negative integer value.")),
      _ => Err(String::from("Expected a non-negative integer value.")),
    }
  }
}

/// If the provided key exists, takes its value from the provided option map
/// and returns it. If the provided key does not exist, returns the default
/// value. Adds a diagnostic if there is any problem resolving the value.
pub fn get_value<T: FromConfigValue>(
  option_map: &mut ConfigKeyMap,
  key: &'static str,
  default_value: T,
  diagnostics: &mut Vec<ConfigurationDiagnostic>,
) -> T {
  get_nullable_value(option_map, key, diagnostics).unwrap_or(default_value)
}

pub fn get_nullable_value<T: FromConfigValue>(
  option_map: &mut ConfigKeyMap,
  key: &'static str,
  diagnostics: &mut Vec<ConfigurationDiagnostic>,
) -> Option<T> {
  let value = match option_map.get(key) {
    Some(raw_value) => match T::from_config_value(raw_value) {
      Ok(value) => Some(value),
      Err(message) => {
        diagnostics.push(ConfigurationDiagnostic {
          property_name: String::from(key),
          message: format!("Error resolving configuration value for '{}'. {}", key, message),
        });
        None
      }
    },
    None => None,
  };
  option_map.shift_remove(key);
  value
}

/// Gets a diagnostic for each remaining key value pair in the option map.
///
/// This should be done last, so it swallows the map.
pub fn get_unknown_property_diagnostics(option_map: ConfigKeyMap) -> Vec<ConfigurationDiagnostic> {
  let mut diagnostics = Vec::new();
  for (property_name, _) in option_map {
    diagnostics.push(ConfigurationDiagnostic {
      message: format!("Unknown property in configuration: {}", property_name),
      property_name,
    });
  }
  diagnostics
}
