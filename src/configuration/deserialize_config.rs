use serde_json::Map;
use serde_json::Value;

use super::ConfigKeyMap;
use super::ConfigKeyValue;
use super::ConfigMap;
use super::ConfigMapValue;
use super::OverrideFiles;
use super::OverrideRule;

/// Deserializes JSONC configuration file text to an unresolved config map.
pub fn deserialize_config(config_file_text: &str) -> Result<ConfigMap, String> {
  let value = match jsonc_parser::parse_to_serde_value(config_file_text, &Default::default()) {
    Ok(value) => value,
    Err(e) => return Err(e.to_string()),
  };

  let root_object_node = match value {
    Some(Value::Object(obj)) => obj,
    _ => return Err(String::from("Expected a root object in the json")),
  };

  let mut properties = ConfigMap::new();

  for (key, value) in root_object_node.into_iter() {
    let property_name = key;
    let property_value = match value {
      Value::Array(elements) if property_name == "overrides" => ConfigMapValue::Overrides(json_array_to_overrides(elements)?),
      Value::Array(elements) => ConfigMapValue::Vec(json_array_to_vec(&property_name, elements)?),
      Value::Bool(value) => ConfigMapValue::KeyValue(ConfigKeyValue::Bool(value)),
      Value::String(value) => ConfigMapValue::KeyValue(ConfigKeyValue::String(value)),
      Value::Number(value) => match value.as_i64() {
        Some(value) => ConfigMapValue::KeyValue(ConfigKeyValue::Number(value)),
        None => return Err(format!("Expected an integer in root object property '{}'", property_name)),
      },
      _ => {
        return Err(format!(
          "Expected an array, boolean, string, or number in root object property '{}'",
          property_name
        ));
      }
    };
    properties.insert(property_name, property_value);
  }

  Ok(properties)
}

fn json_array_to_vec(parent_prop_name: &str, elements: Vec<Value>) -> Result<Vec<String>, String> {
  let mut result = Vec::with_capacity(elements.len());

  for element in elements {
    match element {
      Value::String(value) => result.push(value),
      _ => return Err(format!("Expected only strings in array '{}'", parent_prop_name)),
    }
  }

  Ok(result)
}

fn json_array_to_overrides(elements: Vec<Value>) -> Result<Vec<OverrideRule>, String> {
  let mut overrides = Vec::with_capacity(elements.len());

  for (index, element) in elements.into_iter().enumerate() {
    let obj = match element {
      Value::Object(obj) => obj,
      _ => return Err(format!("Expected an object in 'overrides' at index {}", index)),
    };

    let mut files = None;
    let mut options = ConfigKeyMap::new();
    for (key, value) in obj.into_iter() {
      match key.as_str() {
        "files" => files = Some(json_value_to_files(index, value)?),
        "options" => {
          options = match value {
            Value::Object(obj) => json_obj_to_options(index, obj)?,
            _ => return Err(format!("Expected an object in 'overrides -> options' at index {}", index)),
          }
        }
        _ => return Err(format!("Unknown property '{}' in 'overrides' at index {}", key, index)),
      }
    }

    let files = match files {
      Some(files) => files,
      None => return Err(format!("Expected a 'files' property in 'overrides' at index {}", index)),
    };

    overrides.push(OverrideRule { files, options });
  }

  Ok(overrides)
}

fn json_value_to_files(index: usize, value: Value) -> Result<OverrideFiles, String> {
  match value {
    Value::String(pattern) => Ok(OverrideFiles::Single(pattern)),
    Value::Array(elements) => Ok(OverrideFiles::List(json_array_to_vec("overrides -> files", elements)?)),
    _ => Err(format!(
      "Expected a string or an array of strings in 'overrides -> files' at index {}",
      index
    )),
  }
}

fn json_obj_to_options(index: usize, obj: Map<String, Value>) -> Result<ConfigKeyMap, String> {
  let mut options = ConfigKeyMap::new();

  for (key, value) in obj.into_iter() {
    let property_name = key;
    let property_value = match value_to_config_key_value(value) {
      Ok(result) => result,
      Err(err) => {
        return Err(format!(
          "{} in object property 'overrides -> options -> {}' at index {}",
          err, property_name, index
        ));
      }
    };
    options.insert(property_name, property_value);
  }

  Ok(options)
}

fn value_to_config_key_value(value: Value) -> Result<ConfigKeyValue, String> {
  match value {
    Value::Bool(value) => Ok(ConfigKeyValue::Bool(value)),
    Value::String(value) => Ok(ConfigKeyValue::String(value)),
    Value::Number(value) => match value.as_i64() {
      Some(value) => Ok(ConfigKeyValue::Number(value)),
      None => Err(String::from("Expected an integer")),
    },
    _ => Err(String::from("Expected a boolean, string, or number")),
  }
}
