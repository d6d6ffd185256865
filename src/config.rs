//! Configuration loading for the command-line driver.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default launch power: 1 mW.
pub const DEFAULT_SIGNAL_POWER: f64 = 0.001;

/// Where a loaded configuration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from the config file.
    File,
    /// No config file was present; built-in defaults apply.
    Defaults,
}

/// Settings for an analysis run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SimulatorConfig {
    /// Launch power of every signal, in watts.
    pub signal_power: f64,
    /// Worker threads used for the all-pairs analysis.
    pub workers: usize,
    /// CSV file receiving the per-path results. A relative path in a config
    /// file is resolved against the directory holding that file.
    pub output: Option<PathBuf>,
    /// Log level for this crate (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: Option<String>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            signal_power: DEFAULT_SIGNAL_POWER,
            workers: 1,
            output: None,
            log_level: None,
        }
    }
}

impl SimulatorConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Returns
    /// * `Ok(SimulatorConfig)` if the file was read, parsed and validated
    /// * `Err(String)` with a descriptive error message otherwise
    pub fn load(config_path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(config_path).map_err(|e| format!("Failed to read config file: {}", e))?;

        let mut config: Self = toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))?;
        config.validate()?;
        if let Some(output) = config.output.as_mut().filter(|output| output.is_relative()) {
            let base = config_path.parent().unwrap_or(Path::new("."));
            *output = base.join(&*output);
        }
        Ok(config)
    }

    /// Load `config_path` if it exists, defaults otherwise.
    ///
    /// Runs before logging is set up, so the caller reports the source.
    pub fn load_or_default(config_path: &Path) -> Result<(Self, ConfigSource), String> {
        if config_path.exists() {
            Ok((Self::load(config_path)?, ConfigSource::File))
        } else {
            Ok((Self::default(), ConfigSource::Defaults))
        }
    }

    /// Derive the config path from a topology file path.
    ///
    /// Replaces the topology filename with "config.toml" in the same directory.
    pub fn config_path_from_topology(topology_path: &Path) -> PathBuf {
        topology_path.parent().unwrap_or(Path::new(".")).join("config.toml")
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.signal_power.is_finite() || self.signal_power <= 0.0 {
            return Err(format!("Invalid signal-power {}, must be a positive number of watts", self.signal_power));
        }
        if self.workers == 0 {
            return Err("Invalid workers, must be at least 1".to_string());
        }
        Ok(())
    }
}
