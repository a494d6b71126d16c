//! Structured logging on stderr.
//!
//! Filter priority: `RUST_LOG` > `--debug` > config `log_level` > [`DEFAULT_LOG_LEVEL`].
//! Note text and API keys are never logged.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let filter = build_filter(
        std::env::var("RUST_LOG").ok().as_deref(),
        debug_flag,
        config_level,
    );

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "logging initialised");
}

fn filter_directive(env: Option<&str>, debug_flag: bool, config_level: Option<&str>) -> String {
    match (env, debug_flag, config_level) {
        (Some(env), _, _) if !env.is_empty() => env.to_string(),
        (_, true, _) => "debug".to_string(),
        (_, false, Some(level)) => level.to_string(),
        _ => DEFAULT_LOG_LEVEL.to_string(),
    }
}

fn build_filter(env: Option<&str>, debug_flag: bool, config_level: Option<&str>) -> EnvFilter {
    let directive = filter_directive(env, debug_flag, config_level);
    EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_beats_flag_and_config() {
        assert_eq!(filter_directive(Some("trace"), true, Some("info")), "trace");
    }

    #[test]
    fn flag_beats_config() {
        assert_eq!(filter_directive(None, true, Some("info")), "debug");
        assert_eq!(filter_directive(Some(""), true, None), "debug");
    }

    #[test]
    fn config_then_default() {
        assert_eq!(filter_directive(None, false, Some("info")), "info");
        assert_eq!(filter_directive(None, false, None), DEFAULT_LOG_LEVEL);
    }
}
