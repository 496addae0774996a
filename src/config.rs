//! Application configuration
//!
//! Supports multiple profiles (debug, release) with different knob presets.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::knob::KnobProps;

/// Knob preset loaded from configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnobSettings {
    /// Rendered diameter in pixels
    pub diameter: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Initial value
    pub value: f64,
    /// Whether to keep an empty slot between max and min
    #[serde(default = "default_space_max_from_zero")]
    pub space_max_from_zero: bool,
}

fn default_space_max_from_zero() -> bool {
    true
}

impl KnobSettings {
    /// Props for a knob built from these settings
    pub fn to_props(&self) -> KnobProps {
        KnobProps::new(self.diameter, self.min, self.max, self.step, self.value)
            .with_space_max_from_zero(self.space_max_from_zero)
    }
}

impl Default for KnobSettings {
    fn default() -> Self {
        Self {
            diameter: 180.0,
            min: 0.0,
            max: 100.0,
            step: 1.0,
            value: 0.0,
            space_max_from_zero: true,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// The active profile (debug, release, etc.)
    pub profile: String,
    /// Knob preset
    pub knob: KnobSettings,
}

impl AppConfig {
    /// Loads configuration based on the specified profile
    ///
    /// Sources, later ones overriding earlier ones:
    /// 1. config/{profile}.toml, searched next to the executable, then in ./config
    /// 2. Environment variables with prefix KNOB_ (e.g., KNOB_KNOB__STEP=5)
    pub fn load(profile: &str) -> Result<Self, ConfigError> {
        Self::load_from_dir(Self::find_config_dir().as_deref(), profile)
    }

    /// Loads a profile from an explicit config directory
    pub fn load_from_dir(dir: Option<&Path>, profile: &str) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(dir) = dir {
            let profile_path = dir.join(profile);
            builder = builder.add_source(File::from(profile_path.as_path()).required(false));
        } else {
            builder =
                builder.add_source(File::with_name(&format!("config/{}", profile)).required(false));
        }

        // Use __ as separator for nested fields (e.g., KNOB_KNOB__MAX)
        builder = builder.add_source(
            Environment::with_prefix("KNOB")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.set_override("profile", profile)?.build()?;

        config.try_deserialize()
    }

    fn find_config_dir() -> Option<PathBuf> {
        if let Ok(exe_path) = std::env::current_exe()
            && let Some(exe_dir) = exe_path.parent()
        {
            let config_dir = exe_dir.join("config");
            if config_dir.exists() {
                return Some(config_dir);
            }
        }

        let cwd_config = PathBuf::from("config");
        if cwd_config.exists() {
            return Some(cwd_config);
        }

        None
    }

    /// Loads configuration using the KNOB_PROFILE environment variable,
    /// defaulting to "release"
    pub fn load_from_env() -> Result<Self, ConfigError> {
        let profile = std::env::var("KNOB_PROFILE").unwrap_or_else(|_| "release".to_string());
        Self::load(&profile)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::load("release").unwrap_or_else(|_| Self {
            profile: "release".to_string(),
            knob: KnobSettings::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_load_profile_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("coarse.toml"),
            "[knob]\ndiameter = 120.0\nmin = 10.0\nmax = 100.0\nstep = 5.0\nvalue = 20.0\n",
        )
        .unwrap();

        let config = AppConfig::load_from_dir(Some(dir.path()), "coarse").unwrap();
        assert_eq!(config.profile, "coarse");
        assert_eq!(config.knob.step, 5.0);
        assert!(config.knob.space_max_from_zero);

        let props = config.knob.to_props();
        assert_eq!(props.scale().num_steps(), 18.0);
        assert_eq!(props.value, 20.0);
    }

    #[test]
    fn test_missing_profile_fails_without_knob_table() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::load_from_dir(Some(dir.path()), "nonexistent").is_err());
    }
}
