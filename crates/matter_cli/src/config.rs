//! Matter configuration file handling

use anyhow::{Context, Result};
use matter_easing::{CurveDefinition, Easing, MotionDuration, MotionEasing};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "matter.toml";

/// Top-level Matter configuration (matter.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MatterConfig {
    #[serde(default)]
    pub motion: MotionConfig,
    /// Named curves, looked up before the built-in presets
    #[serde(default)]
    pub curves: BTreeMap<String, CurveDefinition>,
}

/// Motion defaults
#[derive(Debug, Deserialize, Serialize)]
pub struct MotionConfig {
    #[serde(default)]
    pub default_duration: MotionDuration,
    /// Number of intervals `matter sample` splits [0, 1] into
    #[serde(default = "default_sample_steps")]
    pub sample_steps: usize,
}

fn default_sample_steps() -> usize {
    10
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            default_duration: MotionDuration::default(),
            sample_steps: default_sample_steps(),
        }
    }
}

fn config_path(path: &Path) -> PathBuf {
    if path.is_file() {
        path.to_path_buf()
    } else {
        path.join(CONFIG_FILE)
    }
}

impl MatterConfig {
    /// Load configuration from a directory (looks for matter.toml)
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = config_path(path);

        if !config_path.exists() {
            anyhow::bail!(
                "No {} found in {}. Run `matter init` to create one.",
                CONFIG_FILE,
                path.display()
            );
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        tracing::debug!(
            path = %config_path.display(),
            curves = config.curves.len(),
            "loaded motion config"
        );
        Ok(config)
    }

    /// Like [`MatterConfig::load_from_dir`], but a missing file yields the defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if config_path(path).exists() {
            Self::load_from_dir(path)
        } else {
            tracing::debug!(path = %path.display(), "no motion config, using presets only");
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Starter configuration written by `matter init`
    pub fn starter() -> Self {
        let mut curves = BTreeMap::new();
        for (name, preset) in [
            ("enter", MotionEasing::EmphasizedDecelerate),
            ("exit", MotionEasing::EmphasizedAccelerate),
            ("move", MotionEasing::Emphasized),
        ] {
            curves.insert(name.to_string(), preset.into());
        }
        Self {
            motion: MotionConfig::default(),
            curves,
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Resolve a curve by config name, falling back to a preset id
    pub fn resolve(&self, name: &str) -> Result<Easing> {
        if let Some(definition) = self.curves.get(name) {
            tracing::debug!(curve = name, ?definition, "resolved curve from config");
            return Ok(definition.easing());
        }
        let preset: MotionEasing = name
            .parse()
            .with_context(|| format!("`{name}` is neither a configured curve nor a preset"))?;
        Ok(preset.easing())
    }
}
