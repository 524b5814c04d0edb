use super::ConfigKeyMap;
use super::ConfigKeyValue;
use super::FormatterConfiguration;
use super::OverrideFiles;
use super::OverrideRule;

/// The configuration the tool ships with: the Solidity plugin handling
/// `.sol` files with a compiler pin and wider, four-space formatting.
pub fn default_configuration() -> FormatterConfiguration {
  FormatterConfiguration {
    plugins: vec![String::from("prettier-plugin-solidity")],
    base_options: ConfigKeyMap::new(),
    overrides: vec![OverrideRule {
      files: OverrideFiles::Single(String::from("*.sol")),
      options: ConfigKeyMap::from([
        (String::from("compiler"), ConfigKeyValue::from_str("0.8.24")),
        (String::from("bracketSpacing"), ConfigKeyValue::from_bool(true)),
        (String::from("printWidth"), ConfigKeyValue::from_i64(120)),
        (String::from("tabWidth"), ConfigKeyValue::from_i64(4)),
      ]),
    }],
  }
}

/// Gets the file text an init command writes for a new project.
pub fn get_init_config_file_text() -> String {
  let mut json_text = String::from("{\n");
  json_text.push_str("  \"plugins\": [\"prettier-plugin-solidity\"],\n");
  json_text.push_str("  \"overrides\": [{\n");
  json_text.push_str("    \"files\": \"*.sol\",\n");
  json_text.push_str("    \"options\": {\n");
  json_text.push_str("      \"compiler\": \"0.8.24\",\n");
  json_text.push_str("      \"bracketSpacing\": true,\n");
  json_text.push_str("      \"printWidth\": 120,\n");
  json_text.push_str("      \"tabWidth\": 4\n");
  json_text.push_str("    }\n");
  json_text.push_str("  }]\n");
  json_text.push_str("}\n");
  json_text
}
