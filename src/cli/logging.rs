//! cli::logging
//!
//! Tracing subscriber setup.
//!
//! Logs go to stderr so they never mix with command output. The filter
//! comes from `STANDUP_LOG` when set (standard `EnvFilter` syntax), else
//! from the verbosity flags.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::core::config::LogFormat;
use crate::ui::output::Verbosity;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "STANDUP_LOG";

/// Build the log filter for `verbosity`, honouring `STANDUP_LOG`.
pub fn filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(verbosity.log_directive()))
}

/// Install the global subscriber.
///
/// Returns false if a subscriber was already installed (e.g., when the
/// CLI is driven repeatedly from tests).
pub fn init(verbosity: Verbosity, format: LogFormat) -> bool {
    let registry = tracing_subscriber::registry().with(filter(verbosity));

    let result = match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init(),
    };

    result.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_harmless() {
        init(Verbosity::Quiet, LogFormat::Text);
        assert!(!init(Verbosity::Debug, LogFormat::Json));
    }
}
