use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Used when `RUST_LOG` is unset: `info` for dependencies, `debug` for the
/// workspace crates.
pub const DEFAULT_FILTER: &str =
    "info,barky_core=debug,barky_domain=debug,barky_app=debug,barky_db=debug,barky_server=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber: console output plus a daily rotating
/// `logs/barky.log` without ANSI colors.
///
/// The returned guard flushes the file writer when dropped, so keep it
/// alive for the whole process.
pub fn setup_logging() -> WorkerGuard {
    let file_appender = tracing_appender::rolling::daily("logs", "barky.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let console_layer = fmt::layer().with_writer(std::io::stdout).with_target(true);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer)
        .with(console_layer)
        .init();

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_covers_workspace_crates() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
        for krate in ["barky_core", "barky_domain", "barky_app", "barky_db", "barky_server"] {
            assert!(
                DEFAULT_FILTER.contains(&format!("{krate}=debug")),
                "{krate} missing from default filter"
            );
        }
    }
}
