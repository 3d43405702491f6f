//! Tracing set-up for the hook.
//!
//! The subscriber is only installed when a filter is configured, so a JVM
//! that loads the library without asking for logs pays nothing. Output
//! goes to stderr. An already-installed global subscriber (an embedding
//! process may have its own) is left in place.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter, Registry};

use crate::config::{HookConfig, LogFormat};

/// Installs the global subscriber described by `config`.
///
/// Returns `true` if a subscriber was installed by this call.
pub fn init_tracing(config: &HookConfig) -> bool {
    let Some(directives) = config.log_filter.as_deref() else {
        return false;
    };
    let filter = EnvFilter::builder().parse_lossy(directives);

    match config.log_format {
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(json_layer).try_init().is_ok()
        }
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_installed_without_filter() {
        assert!(!init_tracing(&HookConfig::default()));
    }
}
