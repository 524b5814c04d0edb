use std::path::Path;

use anyhow::Result;

use crate::utils::GlobMatcher;
use crate::utils::GlobMatcherOptions;

use super::resolve_options;
use super::FormatterConfiguration;
use super::ResolveOptionsResult;

/// Matches a configuration's override rules against file paths and
/// resolves the options that apply to each path.
pub struct OverrideMatcher<'a> {
  config: &'a FormatterConfiguration,
  matchers: Vec<GlobMatcher>,
}

impl<'a> OverrideMatcher<'a> {
  /// Creates a matcher for the configuration's override rules, with
  /// paths evaluated relative to the provided base directory (usually
  /// the directory of the configuration file).
  pub fn new(config: &'a FormatterConfiguration, base_dir: impl AsRef<Path>) -> Result<OverrideMatcher<'a>> {
    let base_dir = base_dir.as_ref();
    let mut matchers = Vec::with_capacity(config.overrides.len());
    for rule in &config.overrides {
      matchers.push(GlobMatcher::new(
        rule.files.patterns(),
        &GlobMatcherOptions {
          base_dir: base_dir.to_path_buf(),
          case_insensitive: false,
        },
      )?);
    }
    Ok(OverrideMatcher { config, matchers })
  }

  /// Gets whether any override rule applies to the provided path.
  pub fn is_match(&self, path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    self.matchers.iter().any(|matcher| matcher.is_match(path))
  }

  /// Resolves the typed options that apply to the provided path.
  ///
  /// The top-level options are applied first, then the options of every
  /// matching override rule in declaration order, so a later rule wins
  /// for any option both specify.
  pub fn options_for_path(&self, path: impl AsRef<Path>) -> ResolveOptionsResult {
    let path = path.as_ref();
    let mut option_map = self.config.base_options.clone();
    for (rule, matcher) in self.config.overrides.iter().zip(self.matchers.iter()) {
      if matcher.is_match(path) {
        for (key, value) in &rule.options {
          option_map.insert(key.clone(), value.clone());
        }
      }
    }
    resolve_options(option_map)
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::super::ConfigKeyMap;
  use super::super::ConfigKeyValue;
  use super::super::OverrideFiles;
  use super::super::OverrideRule;
  use super::*;

  fn get_config() -> FormatterConfiguration {
    FormatterConfiguration {
      plugins: vec![String::from("prettier-plugin-solidity")],
      base_options: ConfigKeyMap::from([(String::from("printWidth"), ConfigKeyValue::from_i64(100))]),
      overrides: vec![
        OverrideRule {
          files: OverrideFiles::Single(String::from("*.sol")),
          options: ConfigKeyMap::from([
            (String::from("compiler"), ConfigKeyValue::from_str("0.8.24")),
            (String::from("tabWidth"), ConfigKeyValue::from_i64(4)),
          ]),
        },
        OverrideRule {
          files: OverrideFiles::Single(String::from("*.t.sol")),
          options: ConfigKeyMap::from([(String::from("tabWidth"), ConfigKeyValue::from_i64(8))]),
        },
      ],
    }
  }

  #[test]
  fn it_should_use_base_options_for_unmatched_path() {
    let config = get_config();
    let matcher = OverrideMatcher::new(&config, "/project").unwrap();
    assert!(!matcher.is_match("/project/src/main.rs"));
    let result = matcher.options_for_path("/project/src/main.rs");
    assert_eq!(result.diagnostics, Vec::new());
    assert_eq!(result.options.print_width, 100);
    assert_eq!(result.options.compiler, None);
    assert_eq!(result.options.tab_width, 2);
  }

  #[test]
  fn it_should_apply_matching_override_over_base_options() {
    let config = get_config();
    let matcher = OverrideMatcher::new(&config, "/project").unwrap();
    let result = matcher.options_for_path("/project/contracts/Token.sol");
    assert_eq!(result.diagnostics, Vec::new());
    assert_eq!(result.options.compiler, Some(String::from("0.8.24")));
    assert_eq!(result.options.print_width, 100);
    assert_eq!(result.options.tab_width, 4);
  }

  #[test]
  fn it_should_let_later_rule_win() {
    let config = get_config();
    let matcher = OverrideMatcher::new(&config, "/project").unwrap();
    let result = matcher.options_for_path("/project/contracts/Token.t.sol");
    assert_eq!(result.diagnostics, Vec::new());
    // both rules match, the later one replaces tabWidth
    assert_eq!(result.options.tab_width, 8);
    assert_eq!(result.options.compiler, Some(String::from("0.8.24")));
  }
}
