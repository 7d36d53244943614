//! Configuration module for the compute filter.
//!
//! Two kinds of configuration live here:
//! - [`Bounds`]: the fixed input contract (values in [0, 1e9], at most 100
//!   inputs, one fractional digit). Built in code and handed to each stage's
//!   entry point; never read from files or the environment.
//! - [`Settings`]: diagnostic logging, loaded from layered sources:
//!   - Default values
//!   - TOML configuration file (only when passed with `--config`)
//!   - Environment variable overrides
//!
//! # Environment Variables
//!
//! Only `COMPUTE_LOGGING__*` variables are read, with double underscores
//! separating nested levels:
//! - `COMPUTE_LOGGING__DEFAULT=debug` sets `logging.default`
//! - `COMPUTE_LOGGING__MODULES__INPUT=trace` sets `logging.modules.input`

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::{ComputeError, ComputeResult};

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "COMPUTE_";

/// Loadable settings. Tables other than `[logging]` are ignored.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    /// Log levels
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Immutable bounds handed to each stage's entry point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Smallest accepted value (inclusive)
    pub min_value: f64,

    /// Largest accepted value (inclusive)
    pub max_value: f64,

    /// Maximum number of input values
    pub max_inputs: usize,

    /// Fractional digits allowed on input and printed on output
    pub decimal_places: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Default level for every module
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Per-module level overrides, keyed by module name
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min_value: 0.0,
            max_value: 1_000_000_000.0,
            max_inputs: 100,
            decimal_places: 1,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: HashMap::new(),
        }
    }
}

impl Bounds {
    /// Inclusive range check. NaN is never contained.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min_value && value <= self.max_value
    }

    /// Range-check a named invocation argument.
    pub fn check_argument(&self, name: &'static str, value: f64) -> ComputeResult<f64> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(ComputeError::ArgumentRange {
                name,
                value,
                min: self.min_value,
                max: self.max_value,
            })
        }
    }
}

impl Settings {
    /// Load configuration from defaults, an optional settings file and the
    /// environment.
    ///
    /// A settings file is read only when `path` is given, and it must exist.
    pub fn load(path: Option<&Path>) -> ComputeResult<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Settings::default()));

        if let Some(path) = path {
            if !path.is_file() {
                return Err(ComputeError::Config(format!(
                    "settings file not found: {}",
                    path.display()
                )));
            }
            figment = figment.merge(Toml::file(path));
        }

        // Keys other than logging.* never reach extraction, so stray
        // COMPUTE_ variables cannot fail a run.
        let env = Env::prefixed(ENV_PREFIX)
            .split("__")
            .filter(|key| key.starts_with("logging."));

        Self::extract(figment.merge(env))
    }

    /// Load configuration from a TOML string layered over defaults, without
    /// consulting the environment.
    pub fn from_toml_str(content: &str) -> ComputeResult<Self> {
        Self::extract(
            Figment::new()
                .merge(Serialized::defaults(Settings::default()))
                .merge(Toml::string(content)),
        )
    }

    fn extract(figment: Figment) -> ComputeResult<Self> {
        figment
            .extract()
            .map_err(|e| ComputeError::Config(e.to_string()))
    }

    /// Render the effective settings as TOML.
    pub fn to_toml(&self) -> ComputeResult<String> {
        toml::to_string_pretty(self).map_err(|e| ComputeError::Config(e.to_string()))
    }
}
