//! Tool configuration module.
//!
//! Handles loading, validating, and merging `dh-guide.toml`. The file supplies
//! the default hardware profile (used when CLI flags are omitted) and the name
//! of the generated config file.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [profile]
//! cpu_threads = 8            # 4, 8, 12 or 16
//! gpu_level = "mid"          # entry, mid, high, ultra
//! target = "balanced"        # performance, balanced, visuals
//!
//! [output]
//! filename = "distant_horizons.toml"
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want:
//!
//! ```toml
//! [profile]
//! gpu_level = "high"
//! ```
//!
//! Unknown keys are rejected to catch typos early. Profile values outside
//! their enumeration are rejected with the same `invalid profile` error the
//! generator uses; they are never rounded to a nearby tier.

use crate::profile::{CpuThreads, HardwareProfile, ProfileError, RawProfile};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the tool config file looked up in the config directory.
pub const CONFIG_FILE: &str = "dh-guide.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Tool configuration loaded from `dh-guide.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    /// Profile used when the CLI does not override a field.
    pub profile: HardwareProfile,
    /// Where generated files go.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// File name of the generated Distant Horizons config.
    pub filename: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            filename: "distant_horizons.toml".to_string(),
        }
    }
}

impl ToolConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let name = &self.output.filename;
        if name.is_empty() {
            return Err(ConfigError::Validation(
                "output.filename must not be empty".into(),
            ));
        }
        if name.contains(['/', '\\']) {
            return Err(ConfigError::Validation(
                "output.filename must be a file name, not a path".into(),
            ));
        }
        if !name.ends_with(".toml") {
            return Err(ConfigError::Validation(
                "output.filename must end in .toml".into(),
            ));
        }
        Ok(())
    }

    /// Overlay CLI selections on the configured profile, field by field.
    ///
    /// Flags arrive as the strings the user typed. Anything that is not a
    /// listed value (including `-4` or a number too large for `u32`) fails
    /// with `InvalidProfile`, the same way a bad config value does.
    pub fn profile_with(
        &self,
        cpu_threads: Option<&str>,
        gpu_level: Option<&str>,
        target: Option<&str>,
    ) -> Result<HardwareProfile, ProfileError> {
        let base = RawProfile::from(self.profile);
        let cpu_threads = match cpu_threads {
            Some(s) => s.parse::<CpuThreads>()?.count(),
            None => base.cpu_threads,
        };
        HardwareProfile::try_from(RawProfile {
            cpu_threads,
            gpu_level: gpu_level.map(str::to_string).unwrap_or(base.gpu_level),
            target: target.map(str::to_string).unwrap_or(base.target),
        })
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(ToolConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Lay a user `dh-guide.toml` over the stock defaults.
///
/// Tables merge key by key, so `[profile] gpu_level = "high"` replaces just
/// that key and the stock `cpu_threads`/`target` survive. Any non-table value
/// in the user file wins outright.
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

/// Read `<config_dir>/dh-guide.toml` without interpreting it.
///
/// Only the one directory is consulted; parent directories and the home
/// directory are never searched. A missing file is `Ok(None)`, a file that
/// is not TOML is an error.
pub fn load_raw_config(config_dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let path = config_dir.join(CONFIG_FILE);
    if !path.is_file() {
        return Ok(None);
    }
    let value: toml::Value = toml::from_str(&fs::read_to_string(&path)?)?;
    Ok(Some(value))
}

/// Turn stock defaults plus an optional user file into a checked [`ToolConfig`].
///
/// This is where out-of-range profile values and unknown keys are caught:
/// after the merge every profile field is present, so deserialization
/// validates the complete profile.
pub fn resolve_config(
    stock: toml::Value,
    user: Option<toml::Value>,
) -> Result<ToolConfig, ConfigError> {
    let merged = match user {
        Some(user) => merge_toml(stock, user),
        None => stock,
    };
    let config: ToolConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the tool config for `config_dir`, falling back to stock defaults when
/// there is no `dh-guide.toml`.
pub fn load_config(config_dir: &Path) -> Result<ToolConfig, ConfigError> {
    resolve_config(stock_defaults_value()?, load_raw_config(config_dir)?)
}

/// Returns a fully-commented stock `dh-guide.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# dh-guide Configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Default hardware profile
# ---------------------------------------------------------------------------
# Used whenever --cpu, --gpu or --target is not given on the command line.
[profile]
# Hardware threads: 4, 8, 12 or 16 (pick 16 for anything above).
cpu_threads = 8

# GPU tier: entry, mid, high or ultra.
#   entry = GTX 1050 / RX 570, mid = RTX 3060 / RX 6600,
#   high = RTX 4070 / RX 7800, ultra = RTX 4090 / RX 7900 XTX
gpu_level = "mid"

# What to optimize for: performance, balanced or visuals.
target = "balanced"

# ---------------------------------------------------------------------------
# Output
# ---------------------------------------------------------------------------
[output]
# File name of the generated Distant Horizons config.
filename = "distant_horizons.toml"
"##
}
