//! Configuration module.
//!
//! Handles loading, validating, and merging the optional `next-routes.toml`
//! file. Stock defaults are the base layer; a user file overrides just the
//! keys it names.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [badge]
//! color = "#EF4444"         # Indicator background color
//!
//! [export]
//! accent = "#0070f3"        # Headings, links, primary button
//! copy_accent = "#28a745"   # "Copy API Routes" button
//!
//! [output]
//! links = true              # Print origin-prefixed links when a page URL is known
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Tool configuration.
///
/// All fields have defaults. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Per-tab route count indicator.
    pub badge: BadgeConfig,
    /// Standalone HTML export.
    pub export: ExportConfig,
    /// Terminal output.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BadgeConfig {
    pub color: String,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            color: "#EF4444".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// Headings, links and the primary button.
    pub accent: String,
    /// The secondary copy button.
    pub copy_accent: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            accent: "#0070f3".to_string(),
            copy_accent: "#28a745".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Print routes as links on the page origin when a URL is given.
    pub links: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { links: true }
    }
}

impl Config {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("badge.color", &self.badge.color),
            ("export.accent", &self.export.accent),
            ("export.copy_accent", &self.export.copy_accent),
        ] {
            if !is_hex_color(value) {
                return Err(ConfigError::Validation(format!(
                    "{key} must be a hex color like #0070f3, got {value:?}"
                )));
            }
        }
        Ok(())
    }
}

/// `#rgb` or `#rrggbb`.
fn is_hex_color(value: &str) -> bool {
    value.strip_prefix('#').is_some_and(|hex| {
        matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
    })
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(Config::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Merge an optional overlay onto the stock defaults, then deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<Config, ConfigError> {
    let base = stock_defaults_value()?;
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: Config = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from a TOML file, or the stock defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let overlay = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            Some(toml::from_str::<toml::Value>(&content)?)
        }
        None => None,
    };
    resolve_config(overlay)
}

/// Returns a fully-commented stock config with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# next-routes configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.
#
# Pass this file with: next-routes --config next-routes.toml <command>

# ---------------------------------------------------------------------------
# Route count indicator
# ---------------------------------------------------------------------------
[badge]
# Background color of the per-tab route count.
color = "#EF4444"

# ---------------------------------------------------------------------------
# HTML export
# ---------------------------------------------------------------------------
[export]
# Headings, links and the "Copy All Routes" button.
accent = "#0070f3"

# The "Copy API Routes" button.
copy_accent = "#28a745"

# ---------------------------------------------------------------------------
# Terminal output
# ---------------------------------------------------------------------------
[output]
# Print routes as links on the page origin when --url is given.
links = true
"##
}
