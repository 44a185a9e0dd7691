use crate::interface_adapters::clients::{DEFAULT_EVENT_RESULTS_URL, DEFAULT_PRACTICE_URL};
use std::{env, fmt};

// Runtime/server settings read once at startup.

pub const DEFAULT_HTTP_PORT: u16 = 8080;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderMode {
    // Forward listings to the Speedhive APIs.
    Live,
    // Answer every listing with an empty array.
    Stub,
}

impl fmt::Display for ProviderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderMode::Live => f.write_str("live"),
            ProviderMode::Stub => f.write_str("stub"),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    InvalidPort(String),
    InvalidMode(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort(value) => write!(f, "PORT is not a valid port: {value:?}"),
            ConfigError::InvalidMode(value) => {
                write!(f, "SPEEDHIVE_MODE must be \"live\" or \"stub\", got {value:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub port: u16,
    pub mode: ProviderMode,
    pub event_results_url: String,
    pub practice_url: String,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Builds settings from any key lookup so tests never touch the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            port: parse_port(lookup("PORT").as_deref())?,
            mode: parse_mode(lookup("SPEEDHIVE_MODE").as_deref())?,
            event_results_url: url_or_default(
                lookup("SPEEDHIVE_EVENT_RESULTS_URL"),
                DEFAULT_EVENT_RESULTS_URL,
            ),
            practice_url: url_or_default(lookup("SPEEDHIVE_PRACTICE_URL"), DEFAULT_PRACTICE_URL),
        })
    }
}

// Blank or unset falls back to the default port.
pub fn parse_port(value: Option<&str>) -> Result<u16, ConfigError> {
    match value.map(str::trim) {
        None | Some("") => Ok(DEFAULT_HTTP_PORT),
        Some(raw) => raw
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(raw.to_string())),
    }
}

pub fn parse_mode(value: Option<&str>) -> Result<ProviderMode, ConfigError> {
    match value.map(str::trim) {
        None | Some("") => Ok(ProviderMode::Live),
        Some(raw) if raw.eq_ignore_ascii_case("live") => Ok(ProviderMode::Live),
        Some(raw) if raw.eq_ignore_ascii_case("stub") => Ok(ProviderMode::Stub),
        Some(raw) => Err(ConfigError::InvalidMode(raw.to_string())),
    }
}

fn url_or_default(value: Option<String>, default: &str) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
