//! Compiled profile registry
//!
//! The registry is built once, before any scan runs, and is read-only
//! afterwards. Scans borrow it (or share it through an `Arc`); it holds no
//! interior mutability, so concurrent scans need no locking.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, trace, warn};

use super::builtin;
use super::classifier::{classify, ColorAssignment};
use super::profile::{parse_profiles, LanguageProfile};
use super::rules::CompiledProfile;
use super::scanner::scan;
use crate::error::{RainbowError, Result};

/// Language id to compiled matchers
#[derive(Default)]
pub struct ProfileRegistry {
    profiles: HashMap<String, CompiledProfile>,
    /// Extension to language id mapping
    extension_map: HashMap<String, String>,
}

impl ProfileRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in profile
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        for (id, profile) in builtin::all_profiles() {
            // register logs failures
            let _ = registry.register(id, &profile);
        }
        registry
    }

    /// Compile and add a profile, replacing any profile with the same id
    ///
    /// A profile that fails to compile is not registered, so later scans
    /// for its id report `UnknownLanguage`.
    pub fn register(&mut self, language: &str, profile: &LanguageProfile) -> Result<()> {
        let compiled = match CompiledProfile::compile(language, profile) {
            Ok(compiled) => compiled,
            Err(e) => {
                warn!(language, error = %e, "skipping language profile");
                self.profiles.remove(language);
                return Err(e);
            }
        };

        for ext in &profile.extensions {
            self.extension_map
                .insert(ext.trim_start_matches('.').to_lowercase(), language.to_string());
        }
        self.profiles.insert(language.to_string(), compiled);
        debug!(language, "registered language profile");
        Ok(())
    }

    /// Register every profile in a TOML document
    ///
    /// Returns how many profiles compiled. Invalid profiles are skipped; a
    /// document that is not valid TOML is an error.
    pub fn load_toml(&mut self, contents: &str) -> Result<usize> {
        let mut loaded = 0;
        for (id, profile) in parse_profiles(contents)? {
            if self.register(&id, &profile).is_ok() {
                loaded += 1;
            }
        }
        Ok(loaded)
    }

    /// Register every profile in a TOML file
    pub fn load_file(&mut self, path: &Path) -> Result<usize> {
        let contents = fs::read_to_string(path)?;
        self.load_toml(&contents)
    }

    /// Get the compiled matchers for a language
    pub fn get(&self, language: &str) -> Result<&CompiledProfile> {
        self.profiles
            .get(language)
            .ok_or_else(|| RainbowError::UnknownLanguage(language.to_string()))
    }

    pub fn contains(&self, language: &str) -> bool {
        self.profiles.contains_key(language)
    }

    /// Detect language from filename
    pub fn detect_language(&self, filename: &Path) -> Option<&str> {
        let ext = filename.extension()?.to_str()?.to_lowercase();
        self.extension_map.get(&ext).map(|s| s.as_str())
    }

    /// List available languages
    pub fn languages(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.profiles.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Scan a document and classify its keywords
    ///
    /// Configuration errors skip the whole document; nothing is emitted.
    pub fn assign_colors(
        &self,
        text: &str,
        language: &str,
        palette_size: usize,
    ) -> Result<Vec<ColorAssignment>> {
        let profile = self.get(language)?;
        let tokens = scan(text, profile);
        let assignments = classify(&tokens, palette_size)?;
        trace!(
            language,
            tokens = tokens.len(),
            assignments = assignments.len(),
            "scanned document"
        );
        Ok(assignments)
    }
}
