//! Application configuration
//!
//! Loaded from `tweetmood.toml` or `.tweetmoodrc.json` in the working
//! directory, then overridden by environment variables and CLI flags.
//!
//! # Configuration Format
//!
//! ```toml
//! # tweetmood.toml
//! execution-mode = "local[4]"
//! application-name = "sentiment-analysis"
//! language = "en"
//! batch-interval-secs = 10
//!
//! [lexicon]
//! root = "resources"
//! stop = "stop-words.dat"
//! positive = "pos-words.dat"
//! negative = "neg-words.dat"
//!
//! [output]
//! dir = "."
//! prefix = "tweets"
//! suffix = "json"
//! ```

use crate::error::{TweetmoodError, TweetmoodResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

pub const TOML_CONFIG_FILE: &str = "tweetmood.toml";
pub const JSON_CONFIG_FILE: &str = ".tweetmoodrc.json";

pub const ENV_EXECUTION_MODE: &str = "TWEETMOOD_EXECUTION_MODE";
pub const ENV_APP_NAME: &str = "TWEETMOOD_APP_NAME";

/// How many workers score a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ExecutionMode {
    /// One worker per available core
    #[default]
    AllCores,
    /// A fixed number of workers (at least 1)
    Workers(usize),
}

impl ExecutionMode {
    /// Worker count this mode resolves to on the current machine
    pub fn workers(&self) -> usize {
        match self {
            ExecutionMode::AllCores => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4),
            ExecutionMode::Workers(n) => *n,
        }
    }
}

impl std::str::FromStr for ExecutionMode {
    type Err = TweetmoodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TweetmoodError::InvalidExecutionMode(s.to_string());
        match s.trim() {
            "local-all-cores" | "local[*]" => Ok(ExecutionMode::AllCores),
            "local" => Ok(ExecutionMode::Workers(1)),
            other => {
                let n: usize = other
                    .strip_prefix("local[")
                    .and_then(|rest| rest.strip_suffix(']'))
                    .ok_or_else(invalid)?
                    .parse()
                    .map_err(|_| invalid())?;
                if n == 0 {
                    return Err(invalid());
                }
                Ok(ExecutionMode::Workers(n))
            }
        }
    }
}

impl std::fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExecutionMode::AllCores => write!(f, "local-all-cores"),
            ExecutionMode::Workers(n) => write!(f, "local[{}]", n),
        }
    }
}

impl TryFrom<String> for ExecutionMode {
    type Error = TweetmoodError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ExecutionMode> for String {
    fn from(mode: ExecutionMode) -> Self {
        mode.to_string()
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct AppConfig {
    /// Worker pool sizing (default: local-all-cores)
    pub execution_mode: ExecutionMode,

    /// Name reported in logs (default: sentiment-analysis)
    pub application_name: String,

    /// Only messages tagged with this language are scored (default: en)
    pub language: String,

    /// Micro-batch length in seconds (default: 10)
    pub batch_interval_secs: u64,

    pub lexicon: LexiconConfig,

    pub output: OutputConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            execution_mode: ExecutionMode::default(),
            application_name: "sentiment-analysis".to_string(),
            language: "en".to_string(),
            batch_interval_secs: 10,
            lexicon: LexiconConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Where the three lexicon files live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Directory the file names below are resolved against
    pub root: String,
    pub stop: String,
    pub positive: String,
    pub negative: String,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            root: "resources".to_string(),
            stop: "stop-words.dat".to_string(),
            positive: "pos-words.dat".to_string(),
            negative: "neg-words.dat".to_string(),
        }
    }
}

/// Where saved batches go
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: String,
    pub prefix: String,
    pub suffix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: ".".to_string(),
            prefix: "tweets".to_string(),
            suffix: "json".to_string(),
        }
    }
}

impl AppConfig {
    /// Load config from `dir` and the process environment.
    ///
    /// Priority (highest first):
    /// 1. Environment variables
    /// 2. `tweetmood.toml`, then `.tweetmoodrc.json`
    /// 3. Built-in defaults
    pub fn load(dir: &Path) -> TweetmoodResult<Self> {
        let mut config = load_file_config(dir);
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Override fields from environment-style lookups
    pub fn apply_env<F>(&mut self, lookup: F) -> TweetmoodResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(mode) = lookup(ENV_EXECUTION_MODE) {
            self.execution_mode = mode.parse()?;
        }
        if let Some(name) = lookup(ENV_APP_NAME) {
            self.application_name = name;
        }
        Ok(())
    }

    /// Reject values the stream runner cannot work with
    pub fn validate(&self) -> TweetmoodResult<()> {
        if self.batch_interval_secs == 0 {
            return Err(TweetmoodError::InvalidConfig(
                "batch-interval-secs must be at least 1".to_string(),
            ));
        }
        if self.language.trim().is_empty() {
            return Err(TweetmoodError::InvalidConfig(
                "language must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn batch_interval(&self) -> Duration {
        Duration::from_secs(self.batch_interval_secs)
    }

    /// Render as TOML, as written by `tweetmood init`
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Load configuration from the first config file found in `dir`.
///
/// A broken file is reported and skipped; defaults are used instead.
pub fn load_file_config(dir: &Path) -> AppConfig {
    let toml_path = dir.join(TOML_CONFIG_FILE);
    if toml_path.exists() {
        match load_toml_config(&toml_path) {
            Ok(config) => {
                debug!("Loaded config from {}", toml_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", toml_path.display(), e);
            }
        }
    }

    let json_path = dir.join(JSON_CONFIG_FILE);
    if json_path.exists() {
        match load_json_config(&json_path) {
            Ok(config) => {
                debug!("Loaded config from {}", json_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", json_path.display(), e);
            }
        }
    }

    debug!("No config file found, using defaults");
    AppConfig::default()
}

fn load_toml_config(path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;
    Ok(config)
}

fn load_json_config(path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}
