use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_ITERATIONS: usize = 200;
pub const DEFAULT_DELAY_MS: u64 = 200;

/// Settings of the [Simulation](crate::simulation::Simulation) loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Maximum number of time steps before the run is given up.
    pub iterations: usize,
    /// Pause between two time steps.
    pub delay: Duration,
    /// Whether agent faults are reported.
    pub debug: bool,
}

/// The configuration file as written on disk. Keys are upper case and `DELAY` is in
/// milliseconds. Unknown keys such as `TILESIZE` are ignored.
#[derive(Clone, Debug, Deserialize)]
struct ConfigFile {
    #[serde(rename = "ITERATIONS", default = "default_iterations")]
    iterations: usize,
    #[serde(rename = "DELAY", default = "default_delay_ms")]
    delay_ms: u64,
    #[serde(rename = "DEBUG", default = "default_debug")]
    debug: bool,
}

fn default_iterations() -> usize {
    DEFAULT_ITERATIONS
}

fn default_delay_ms() -> u64 {
    DEFAULT_DELAY_MS
}

fn default_debug() -> bool {
    true
}

impl From<ConfigFile> for SimulationConfig {
    fn from(file: ConfigFile) -> SimulationConfig {
        SimulationConfig {
            iterations: file.iterations,
            delay: Duration::from_millis(file.delay_ms),
            debug: file.debug,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> SimulationConfig {
        SimulationConfig {
            iterations: default_iterations(),
            delay: Duration::from_millis(default_delay_ms()),
            debug: default_debug(),
        }
    }
}

impl SimulationConfig {
    /// Parses TOML text such as
    ///
    /// ```toml
    /// ITERATIONS = 200
    /// DELAY = 200
    /// DEBUG = true
    /// ```
    ///
    /// Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<SimulationConfig, ConfigError> {
        let file: ConfigFile = toml::from_str(text)?;
        Ok(file.into())
    }

    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<SimulationConfig, ConfigError> {
        let text = fs::read_to_string(path)?;
        SimulationConfig::from_toml_str(&text)
    }
}
