//! Configuration module for Tweetmood
//!
//! This module handles:
//! - The config file (tweetmood.toml / .tweetmoodrc.json)
//! - Environment overrides
//! - Execution mode parsing

mod app_config;

pub use app_config::{
    load_file_config,
    AppConfig,
    ExecutionMode,
    LexiconConfig,
    OutputConfig,
    ENV_APP_NAME,
    ENV_EXECUTION_MODE,
    JSON_CONFIG_FILE,
    TOML_CONFIG_FILE,
};
