//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! A WASM bundle has no process environment, so values are captured with
//! `option_env!` when the bundle is compiled. The data source is picked here
//! and only here; nothing else inspects the hosting page to decide between the
//! live API and the demo dataset.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

pub const DEFAULT_API_BASE: &str = "http://localhost:5000";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

/// Errors produced while resolving configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown TASKFLOW_DATA_SOURCE: {0} (expected 'api' or 'demo')")]
    UnknownDataSource(String),

    #[error("invalid TASKFLOW_LOG_LEVEL: {0}")]
    InvalidLogLevel(String),

    #[error("TASKFLOW_API_BASE must not be empty")]
    EmptyApiBase,
}

/// Where entity collections come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DataSourceKind {
    /// The live REST API at `api_base`.
    #[default]
    Api,
    /// The fixed in-memory demo dataset.
    Demo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub data_source: DataSourceKind,
    pub log_level: log::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            data_source: DataSourceKind::Api,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl ClientConfig {
    /// Build typed config from the values captured at compile time.
    ///
    /// Optional:
    /// - `TASKFLOW_API_BASE`: default `http://localhost:5000`
    /// - `TASKFLOW_DATA_SOURCE`: `api` (default) or `demo`
    /// - `TASKFLOW_LOG_LEVEL`: `error|warn|info|debug|trace`, default `info`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any value is present but invalid.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("TASKFLOW_API_BASE"),
            option_env!("TASKFLOW_DATA_SOURCE"),
            option_env!("TASKFLOW_LOG_LEVEL"),
        )
    }

    /// Build typed config from raw optional values.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any value is present but invalid.
    pub fn from_values(
        api_base: Option<&str>,
        data_source: Option<&str>,
        log_level: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let api_base = parse_api_base(api_base)?;
        let data_source = parse_data_source(data_source)?;
        let log_level = parse_log_level(log_level)?;
        Ok(Self { api_base, data_source, log_level })
    }

    pub fn is_demo(&self) -> bool {
        self.data_source == DataSourceKind::Demo
    }
}

fn parse_api_base(raw: Option<&str>) -> Result<String, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_API_BASE.to_owned());
    };
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyApiBase);
    }
    Ok(trimmed.to_owned())
}

fn parse_data_source(raw: Option<&str>) -> Result<DataSourceKind, ConfigError> {
    match raw.map(str::trim).unwrap_or("api") {
        "api" => Ok(DataSourceKind::Api),
        "demo" => Ok(DataSourceKind::Demo),
        other => Err(ConfigError::UnknownDataSource(other.to_owned())),
    }
}

fn parse_log_level(raw: Option<&str>) -> Result<log::Level, ConfigError> {
    match raw {
        None => Ok(DEFAULT_LOG_LEVEL),
        Some(value) => {
            log::Level::from_str(value.trim()).map_err(|_| ConfigError::InvalidLogLevel(value.to_owned()))
        }
    }
}
