//! Language profiles
//!
//! A profile is the static description of one language's block keywords
//! and the delimiters of regions that must not be scanned. Profiles are
//! plain data; `rules` compiles them into matchers.
//!
//! Profiles can also be loaded from TOML, one table per language id:
//!
//! ```toml
//! [ruby]
//! case_sensitive = true
//! open_tokens = ["class", "def", "do"]
//! close_tokens = ["end"]
//! neutral_tokens = ["else"]
//! ignore_regions = [{ open = "#", single_line = true }]
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::Result;

/// A comment or string delimiter pair
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IgnoreRegion {
    /// Pattern that starts the region
    pub open: String,
    /// Pattern that ends the region (unused for single-line regions)
    #[serde(default)]
    pub close: Option<String>,
    /// Region runs to end of line
    #[serde(default)]
    pub single_line: bool,
}

impl IgnoreRegion {
    /// Region closed by the end of the line (`#`, `--`)
    pub fn line(open: &str) -> Self {
        Self {
            open: open.to_string(),
            close: None,
            single_line: true,
        }
    }

    /// Region closed by an explicit pattern (`"`...`"`, `=begin`...`=end`)
    pub fn block(open: &str, close: &str) -> Self {
        Self {
            open: open.to_string(),
            close: Some(close.to_string()),
            single_line: false,
        }
    }
}

/// Bracket pair delimiting a comprehension
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ComprehensionDelimiter {
    pub open: String,
    pub close: String,
}

/// Static keyword and delimiter rules for one language
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LanguageProfile {
    #[serde(default)]
    pub case_sensitive: bool,
    #[serde(default)]
    pub open_tokens: Vec<String>,
    #[serde(default)]
    pub close_tokens: Vec<String>,
    #[serde(default)]
    pub neutral_tokens: Vec<String>,
    #[serde(default)]
    pub ignore_regions: Vec<IgnoreRegion>,
    #[serde(default)]
    pub comprehension_delimiters: Vec<ComprehensionDelimiter>,
    /// File extensions used for language detection
    #[serde(default)]
    pub extensions: Vec<String>,
}

impl LanguageProfile {
    /// Create a profile from keyword lists
    pub fn new(open: &[&str], close: &[&str], neutral: &[&str]) -> Self {
        Self {
            case_sensitive: false,
            open_tokens: to_strings(open),
            close_tokens: to_strings(close),
            neutral_tokens: to_strings(neutral),
            ignore_regions: Vec::new(),
            comprehension_delimiters: Vec::new(),
            extensions: Vec::new(),
        }
    }

    /// Builder: match keywords with exact case
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Builder: add an ignore region
    pub fn with_ignore(mut self, region: IgnoreRegion) -> Self {
        self.ignore_regions.push(region);
        self
    }

    /// Builder: add a comprehension bracket pair
    pub fn with_comprehension(mut self, open: &str, close: &str) -> Self {
        self.comprehension_delimiters.push(ComprehensionDelimiter {
            open: open.to_string(),
            close: close.to_string(),
        });
        self
    }

    /// Builder: add file extensions
    pub fn with_extensions(mut self, extensions: &[&str]) -> Self {
        self.extensions.extend(to_strings(extensions));
        self
    }
}

/// Parse a TOML document of `[language-id]` tables
pub fn parse_profiles(contents: &str) -> Result<BTreeMap<String, LanguageProfile>> {
    Ok(toml::from_str(contents)?)
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RainbowError;

    #[test]
    fn test_builders() {
        let profile = LanguageProfile::new(&["if"], &["end"], &["else"])
            .with_case_sensitive(true)
            .with_ignore(IgnoreRegion::line("#"))
            .with_comprehension("[", "]")
            .with_extensions(&["rb"]);

        assert!(profile.case_sensitive);
        assert_eq!(profile.open_tokens, vec!["if".to_string()]);
        assert!(profile.ignore_regions[0].single_line);
        assert_eq!(profile.ignore_regions[0].close, None);
        assert_eq!(profile.comprehension_delimiters[0].close, "]");
        assert_eq!(profile.extensions, vec!["rb".to_string()]);
    }

    #[test]
    fn test_parse_profiles() {
        let contents = r#"
[basic]
case_sensitive = true
open_tokens = ["IF", "WHILE"]
close_tokens = ["WEND", "END IF"]
neutral_tokens = ["ELSE"]
ignore_regions = [
    { open = "'", single_line = true },
    { open = '"', close = '"' },
]
extensions = ["bas"]
        "#;

        let profiles = parse_profiles(contents).unwrap();
        let basic = &profiles["basic"];
        assert!(basic.case_sensitive);
        assert_eq!(basic.close_tokens.len(), 2);
        assert_eq!(basic.ignore_regions[1], IgnoreRegion::block("\"", "\""));
        assert!(basic.comprehension_delimiters.is_empty());
    }

    #[test]
    fn test_parse_profiles_defaults() {
        let profiles = parse_profiles("[empty]\n").unwrap();
        let empty = &profiles["empty"];
        assert!(!empty.case_sensitive);
        assert!(empty.open_tokens.is_empty());
    }

    #[test]
    fn test_parse_profiles_invalid() {
        let err = parse_profiles("[broken]\nopen_tokens = 3\n").unwrap_err();
        assert!(matches!(err, RainbowError::ProfileFormat(_)));
        assert!(!err.is_configuration());
    }
}
