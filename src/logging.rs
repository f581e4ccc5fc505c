//! Log subscriber setup for the command-line tool.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Returns the default filter directive; `RUST_LOG` takes precedence.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "capacity_planner=debug,info"
    } else {
        "capacity_planner=info,warn"
    }
}

/// Installs a compact stderr subscriber.
///
/// Log output goes to stderr so `calculate --format json` or `--format csv`
/// can be piped safely.
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
