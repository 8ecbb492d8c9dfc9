//! Log output setup

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber for line-mode commands
///
/// `RUST_LOG` wins over `verbose` when set.
pub fn init_logger(verbose: bool) {
    let default = if verbose {
        "letter_box=debug,info"
    } else {
        "letter_box=info"
    };
    install(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)));
}

/// Install a subscriber that stays quiet unless `RUST_LOG` asks otherwise
///
/// Used by the full-screen UI, where stray log lines would corrupt the
/// display. Output goes to stderr so it can be redirected.
pub fn init_quiet_logger() {
    install(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")));
}

fn install(filter: EnvFilter) {
    let _ = tracing_subscriber::registry()
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
        .try_init();
}
