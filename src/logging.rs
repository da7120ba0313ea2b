//! Logger setup for the command-line tool.

use log::LevelFilter;

/// Initializes `env_logger` at `Debug` when `verbose` is set, `Warn`
/// otherwise. An explicit `RUST_LOG` takes precedence.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_target(false);

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // a second init (tests, embedding) keeps the first logger
    if builder.try_init().is_ok() {
        log::debug!("logger initialized at {level:?}");
    }
}
