//! Configuration file support
//!
//! Loads settings from ~/.rainbow-end.conf (or %USERPROFILE%\.rainbow-end.conf on Windows)
//!
//! Format: simple key=value pairs, one per line
//! Lines starting with # are comments
//!
//! Example:
//! ```text
//! # rainbow-end configuration
//! colors = yellow, magenta, cyan, bright-green
//! profiles = /home/me/.config/rainbow-end/profiles.toml
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use tracing::warn;

use crate::error::Result;
use crate::syntax::Palette;

/// Configuration settings
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Colors cycled by nesting depth
    pub palette: Palette,
    /// Extra TOML profile file, applied over the built-ins
    pub profiles: Option<PathBuf>,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".rainbow-end.conf"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".rainbow-end.conf"))
        }
    }

    /// Load configuration from file
    ///
    /// A missing file gives the defaults. Invalid settings are logged and
    /// ignored so the rest of the file still applies.
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Some(path) = Self::config_path() {
            if let Ok(contents) = fs::read_to_string(&path) {
                let settings = Self::parse(&contents);
                if let Err(e) = config.apply(&settings) {
                    warn!(path = %path.display(), error = %e, "ignoring invalid setting");
                }
            }
        }

        config
    }

    /// Parse config file contents into key-value pairs
    fn parse(contents: &str) -> HashMap<String, String> {
        let mut settings = HashMap::new();

        for line in contents.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // Parse key = value
            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim().to_lowercase();
                let value = value.trim().to_string();
                settings.insert(key, value);
            }
        }

        settings
    }

    /// Apply settings from parsed config
    ///
    /// Settings that parse are applied even when another one fails; the
    /// first failure is returned.
    fn apply(&mut self, settings: &HashMap<String, String>) -> Result<()> {
        if let Some(value) = settings.get("profiles") {
            if !value.is_empty() {
                self.profiles = Some(PathBuf::from(value));
            }
        }

        if let Some(value) = settings.get("colors") {
            self.palette = parse_palette(value)?;
        }

        Ok(())
    }
}

/// Parse a comma-separated color list
pub fn parse_palette(value: &str) -> Result<Palette> {
    let names: Vec<&str> = value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect();
    Palette::from_names(&names)
}
