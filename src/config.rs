//! Runtime configuration read from the environment (and `.env`).

use crate::processing::{StatsOptions, DEFAULT_MATERIALIZE_LIMIT};
use std::error::Error;
use std::str::FromStr;

pub const DEFAULT_RANGES_FILE: &str = "ranges.json";
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

pub const ENV_RANGES_FILE: &str = "IPAM_RANGES_FILE";
pub const ENV_MAX_ADDRESSES: &str = "IPAM_MAX_ADDRESSES";
pub const ENV_LOG_CONFIG: &str = "IPAM_LOG_CONFIG";
pub const ENV_RESERVED_AS_USED: &str = "IPAM_RESERVED_AS_USED";
pub const ENV_RESERVED_AS_AVAILABLE: &str = "IPAM_RESERVED_AS_AVAILABLE";
pub const ENV_SHOW_HIDDEN: &str = "IPAM_SHOW_HIDDEN";
pub const ENV_OUTPUT: &str = "IPAM_OUTPUT";

/// What the binary prints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Range summaries, the CSV address listing and totals.
    #[default]
    Text,
    /// One JSON document with every inventory and the totals.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<OutputFormat, String> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid {ENV_OUTPUT}='{s}': expected text or json")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub ranges_file: String,
    /// Largest range (usable hosts) that is expanded into memory.
    pub max_addresses: u64,
    pub log_config: String,
    pub stats: StatsOptions,
    /// List ranges flagged hidden as well.
    pub show_hidden: bool,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            ranges_file: DEFAULT_RANGES_FILE.to_string(),
            max_addresses: DEFAULT_MATERIALIZE_LIMIT,
            log_config: DEFAULT_LOG_CONFIG.to_string(),
            stats: StatsOptions::default(),
            show_hidden: false,
            output: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup; unset keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(file) = lookup(ENV_RANGES_FILE) {
            config.ranges_file = file;
        }
        if let Some(log_config) = lookup(ENV_LOG_CONFIG) {
            config.log_config = log_config;
        }
        if let Some(max) = lookup(ENV_MAX_ADDRESSES) {
            config.max_addresses = max
                .trim()
                .parse()
                .map_err(|e| format!("Invalid {ENV_MAX_ADDRESSES}='{max}': {e}"))?;
        }
        if let Some(v) = lookup(ENV_RESERVED_AS_USED) {
            config.stats.include_reserved_in_used = parse_bool(ENV_RESERVED_AS_USED, &v)?;
        }
        if let Some(v) = lookup(ENV_RESERVED_AS_AVAILABLE) {
            config.stats.include_reserved_in_available =
                parse_bool(ENV_RESERVED_AS_AVAILABLE, &v)?;
        }
        if let Some(v) = lookup(ENV_SHOW_HIDDEN) {
            config.show_hidden = parse_bool(ENV_SHOW_HIDDEN, &v)?;
        }
        if let Some(v) = lookup(ENV_OUTPUT) {
            config.output = v.parse()?;
        }

        log::debug!("config: {config:?}");
        Ok(config)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, Box<dyn Error>> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(format!("Invalid {key}='{value}': expected true or false").into()),
    }
}
