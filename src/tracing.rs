use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

use crate::util::env::{env_flag, env_opt};

/// Filter used by the `ott` binary when neither `RUST_LOG` nor `OTT_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Sets up the global tracing subscriber with a fmt formatter and env filter.
///
/// `RUST_LOG` wins, then `OTT_LOG`, then `default_filter`. Output goes to
/// stderr so command output on stdout stays pipeable; `OTT_LOG_ANSI=0`
/// turns off colour codes.
pub fn init_tracing(default_filter: &str) -> Result<(), anyhow::Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(env_opt("OTT_LOG").unwrap_or_else(|| default_filter.to_string()))
    });

    SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(env_flag("OTT_LOG_ANSI", true))
        .with_target(true)
        .with_line_number(true)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn default_filter_stays_quiet_below_warn() {
        let filter = EnvFilter::new(DEFAULT_LOG_FILTER);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }
}
