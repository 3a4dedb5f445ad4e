//! CLI configuration management
//!
//! Settings are resolved from four sources, highest priority first:
//! 1. Command-line flags
//! 2. `TRINOMIAL_*` environment variables
//! 3. TOML configuration file
//! 4. Default values
//!
//! ```toml
//! log_level = "info"
//! format = "table"
//!
//! [walk]
//! steps = 20
//! up = 33
//! neutral = 33
//! simulations = 1000
//! seed = 42
//! ```

use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use trinomial_core::ProbabilityTriple;
use trinomial_engine::mc::SimulationConfig;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json")]
    InvalidFormat(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Output formats for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

/// Walk parameters as entered by a user.
///
/// Probabilities are integer percentages; the down percentage is whatever
/// remains after `up` and `neutral`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WalkSettings {
    /// Number of steps per path
    pub steps: usize,
    /// Percentage chance of an up move
    pub up: u32,
    /// Percentage chance of staying put
    pub neutral: u32,
    /// Number of Monte Carlo paths
    pub simulations: usize,
    /// Seed for reproducible sampling
    pub seed: Option<u64>,
}

impl Default for WalkSettings {
    fn default() -> Self {
        Self {
            steps: 20,
            up: 33,
            neutral: 33,
            simulations: 1000,
            seed: None,
        }
    }
}

impl WalkSettings {
    /// Percentage chance of a down move.
    pub fn down(&self) -> u32 {
        100u32.saturating_sub(self.up.saturating_add(self.neutral))
    }

    /// The validated probability triple.
    pub fn probabilities(&self) -> Result<ProbabilityTriple, ConfigError> {
        ProbabilityTriple::from_percentages(self.up, self.neutral).map_err(|e| {
            ConfigError::InvalidValue {
                name: "walk.up + walk.neutral",
                value: e.to_string(),
            }
        })
    }

    /// The validated engine configuration.
    pub fn simulation_config(&self) -> Result<SimulationConfig, ConfigError> {
        SimulationConfig::builder()
            .n_steps(self.steps)
            .n_simulations(self.simulations)
            .maybe_seed(self.seed)
            .build()
            .map_err(|e| ConfigError::InvalidValue {
                name: "walk",
                value: e.to_string(),
            })
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Output format
    #[serde(deserialize_with = "deserialize_format")]
    pub format: OutputFormat,
    /// Walk parameters
    pub walk: WalkSettings,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Load the file if it exists, otherwise start from defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Override with `TRINOMIAL_*` environment variables
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Override from an arbitrary variable lookup
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("TRINOMIAL_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(format) = lookup("TRINOMIAL_FORMAT") {
            self.format = OutputFormat::from_str(&format)?;
        }
        if let Some(steps) = lookup("TRINOMIAL_STEPS") {
            self.walk.steps = parse_env("TRINOMIAL_STEPS", &steps)?;
        }
        if let Some(up) = lookup("TRINOMIAL_UP") {
            self.walk.up = parse_env("TRINOMIAL_UP", &up)?;
        }
        if let Some(neutral) = lookup("TRINOMIAL_NEUTRAL") {
            self.walk.neutral = parse_env("TRINOMIAL_NEUTRAL", &neutral)?;
        }
        if let Some(simulations) = lookup("TRINOMIAL_SIMULATIONS") {
            self.walk.simulations = parse_env("TRINOMIAL_SIMULATIONS", &simulations)?;
        }
        if let Some(seed) = lookup("TRINOMIAL_SEED") {
            self.walk.seed = Some(parse_env("TRINOMIAL_SEED", &seed)?);
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) {
        if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        if let Some(seed) = cli.seed {
            self.walk.seed = Some(seed);
        }
        if let Some(steps) = cli.steps {
            self.walk.steps = steps;
        }
        if let Some(up) = cli.up {
            self.walk.up = up;
        }
        if let Some(neutral) = cli.neutral {
            self.walk.neutral = neutral;
        }
        if let Some(simulations) = cli.simulations {
            self.walk.simulations = simulations;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.walk.up > 100 || self.walk.neutral > 100 {
            return Err(ConfigError::InvalidValue {
                name: "walk.up / walk.neutral",
                value: format!("{} / {} (each must be 0-100)", self.walk.up, self.walk.neutral),
            });
        }
        self.walk.probabilities()?;
        self.walk.simulation_config()?;
        Ok(())
    }
}

fn parse_env<T: FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::EnvError(format!("{}: cannot parse '{}'", key, raw)))
}

/// Command-line overrides
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Raise the log level to debug
    pub verbose: bool,
    /// Output format override
    pub format: Option<OutputFormat>,
    /// Seed override
    pub seed: Option<u64>,
    /// Step count override
    pub steps: Option<usize>,
    /// Up percentage override
    pub up: Option<u32>,
    /// Neutral percentage override
    pub neutral: Option<u32>,
    /// Simulation count override
    pub simulations: Option<usize>,
}

/// Build configuration from all sources
pub fn build_config(path: &Path, cli: &CliOverrides) -> Result<CliConfig, ConfigError> {
    let mut config = CliConfig::load_or_default(path)?;
    config.apply_env()?;
    config.merge_with_cli(cli);
    config.validate()?;
    Ok(config)
}
