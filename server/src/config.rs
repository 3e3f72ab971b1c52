//! Server configuration parsed from environment variables.
//!
//! Bind address and site root belong to the Leptos configuration; this
//! module only covers what the server adds on top.

use std::path::PathBuf;
use std::str::FromStr;

use tracing_subscriber::EnvFilter;

pub const DEFAULT_ASSETS_DIR: &str = "public";
pub const DEFAULT_STATIC_MAX_AGE_SECS: u64 = 86_400;
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set but its value cannot be used.
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory served as the fallback for non-route paths.
    pub assets_dir: PathBuf,
    /// `max-age` for `/pkg` and media responses.
    pub static_max_age_secs: u64,
}

impl Config {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `ASSETS_DIR`: default `public`
    /// - `STATIC_MAX_AGE_SECS`: default 86400
    pub fn from_env() -> Result<Self, ConfigError> {
        let assets_dir = parse_assets_dir(std::env::var("ASSETS_DIR").ok().as_deref())?;
        let static_max_age_secs = env_parse("STATIC_MAX_AGE_SECS", DEFAULT_STATIC_MAX_AGE_SECS)?;
        Ok(Self { assets_dir, static_max_age_secs })
    }
}

/// Parse `key` if set. Unset falls back to `default`; set but unparsable is
/// an error rather than a silent default.
pub(crate) fn env_parse<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::Invalid { var: key, reason: format!("{raw:?}: {e}") }),
        Err(_) => Ok(default),
    }
}

/// Log filter from `RUST_LOG`. Unset or blank uses [`DEFAULT_LOG_FILTER`];
/// a directive that does not parse is an error rather than a silent default.
pub fn log_filter(raw: Option<&str>) -> Result<EnvFilter, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(EnvFilter::new(DEFAULT_LOG_FILTER)),
        Some(directives) => EnvFilter::try_new(directives)
            .map_err(|e| ConfigError::Invalid { var: "RUST_LOG", reason: format!("{directives:?}: {e}") }),
    }
}

fn parse_assets_dir(raw: Option<&str>) -> Result<PathBuf, ConfigError> {
    match raw.map(str::trim) {
        None => Ok(PathBuf::from(DEFAULT_ASSETS_DIR)),
        Some("") => Err(ConfigError::Invalid { var: "ASSETS_DIR", reason: "must not be empty".into() }),
        Some(dir) => Ok(PathBuf::from(dir)),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
