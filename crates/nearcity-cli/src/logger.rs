//! Logger initialization.

use log::LevelFilter;

/// Initializes `env_logger`.
///
/// `RUST_LOG` is read first; an explicit `--log-level` overrides it. Without
/// either, only warnings and errors are shown so that query output stays
/// clean.
pub fn init_logger(level: Option<LevelFilter>) -> anyhow::Result<()> {
    let mut builder = env_logger::Builder::from_default_env();

    match level {
        Some(level) => {
            builder.filter_level(level);
        }
        None if std::env::var_os("RUST_LOG").is_none() => {
            builder.filter_level(LevelFilter::Warn);
        }
        None => {}
    }

    builder
        .format_timestamp(None)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logger: {e}"))
}
