use std::path::Path;
use std::path::PathBuf;

use anyhow::Result;
use ignore::overrides::Override;
use ignore::overrides::OverrideBuilder;
use ignore::Match;

pub struct GlobMatcherOptions {
  pub base_dir: PathBuf,
  pub case_insensitive: bool,
}

/// Matches file paths against a set of gitignore-style glob patterns.
pub struct GlobMatcher {
  base_dir: PathBuf,
  matcher: Override,
}

impl GlobMatcher {
  pub fn new(patterns: &[String], opts: &GlobMatcherOptions) -> Result<GlobMatcher> {
    let mut builder = OverrideBuilder::new(&opts.base_dir);
    let builder = builder.case_insensitive(opts.case_insensitive)?;

    for pattern in patterns {
      // a pattern without a slash matches at any directory depth
      let pattern = if pattern.contains('/') {
        strip_slash_start_pattern(pattern).to_string()
      } else if is_negated_glob(pattern) {
        format!("!**/{}", &pattern[1..])
      } else {
        format!("**/{}", pattern)
      };
      builder.add(&pattern)?;
    }

    Ok(GlobMatcher {
      matcher: builder.build()?,
      base_dir: opts.base_dir.clone(),
    })
  }

  pub fn is_match(&self, path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    let path = path.strip_prefix(&self.base_dir).unwrap_or(path);
    matches!(self.matcher.matched(path, false), Match::Whitelist(_))
  }
}

pub fn is_negated_glob(pattern: &str) -> bool {
  pattern.starts_with('!')
}

fn strip_slash_start_pattern(pattern: &str) -> &str {
  pattern.strip_prefix('/').unwrap_or(pattern)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn new_matcher(patterns: &[&str]) -> GlobMatcher {
    GlobMatcher::new(
      &patterns.iter().map(|p| p.to_string()).collect::<Vec<_>>(),
      &GlobMatcherOptions {
        base_dir: PathBuf::from("/project"),
        case_insensitive: false,
      },
    )
    .unwrap()
  }

  #[test]
  fn it_should_match_extension_pattern_at_any_depth() {
    let matcher = new_matcher(&["*.sol"]);
    assert!(matcher.is_match("/project/Token.sol"));
    assert!(matcher.is_match("/project/contracts/Token.sol"));
    assert!(!matcher.is_match("/project/contracts/token.rs"));
  }

  #[test]
  fn it_should_match_directory_pattern() {
    let matcher = new_matcher(&["contracts/**/*.sol"]);
    assert!(matcher.is_match("/project/contracts/Token.sol"));
    assert!(!matcher.is_match("/project/scripts/Token.sol"));
  }

  #[test]
  fn it_should_handle_negated_pattern() {
    let matcher = new_matcher(&["*.sol", "!*.t.sol"]);
    assert!(matcher.is_match("/project/Token.sol"));
    assert!(!matcher.is_match("/project/Token.t.sol"));
  }

  #[test]
  fn it_should_be_case_sensitive_by_default() {
    let matcher = new_matcher(&["*.sol"]);
    assert!(!matcher.is_match("/project/Token.SOL"));
  }

  #[test]
  fn it_should_match_path_outside_base_dir_as_relative() {
    let matcher = new_matcher(&["*.sol"]);
    assert!(matcher.is_match("contracts/Token.sol"));
  }
}
