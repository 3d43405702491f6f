//! Hook configuration, read from the environment when the library loads.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `SQUIRRELJME_HOOK_LOG` | `tracing` filter (`debug`, `squirreljme_hook=trace`); falls back to `RUST_LOG` | tracing off |
//! | `SQUIRRELJME_HOOK_LOG_FORMAT` | `text` or `json` | `text` |
//! | `SQUIRRELJME_HOOK_BANNER` | print the load banner on stderr | `true` |

use crate::error::ConfigError;

pub const LOG_VAR: &str = "SQUIRRELJME_HOOK_LOG";
pub const LOG_FORMAT_VAR: &str = "SQUIRRELJME_HOOK_LOG_FORMAT";
pub const BANNER_VAR: &str = "SQUIRRELJME_HOOK_BANNER";

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Standard flat text lines.
    #[default]
    Text,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookConfig {
    /// Filter directives. `None` leaves tracing uninstalled.
    pub log_filter: Option<String>,
    pub log_format: LogFormat,
    pub banner: bool,
}

impl Default for HookConfig {
    fn default() -> Self {
        HookConfig {
            log_filter: None,
            log_format: LogFormat::Text,
            banner: true,
        }
    }
}

impl HookConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads the configuration through `lookup`, which returns the value of
    /// an environment variable if it is set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_filter = lookup(LOG_VAR).or_else(|| lookup("RUST_LOG"));
        let log_format = lookup(LOG_FORMAT_VAR)
            .map(|v| LogFormat::parse(&v))
            .unwrap_or_default();
        let banner = match lookup(BANNER_VAR) {
            Some(value) => parse_flag(BANNER_VAR, &value)?,
            None => true,
        };

        Ok(HookConfig {
            log_filter,
            log_format,
            banner,
        })
    }
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var,
            value: value.to_string(),
        }),
    }
}
