//! Logging setup: `log` records dispatched through fern.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use log::LevelFilter;

/// Parse a level name such as `warn` or `DEBUG`
pub fn level_filter(name: &str) -> Result<LevelFilter> {
    name.parse::<LevelFilter>()
        .map_err(|_| anyhow::anyhow!("Invalid log level '{}'", name))
}

/// Install the global logger
///
/// Records go to stderr, and to `config.file` when one is set. Can only
/// succeed once per process.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level_filter(&config.level)?)
        .chain(std::io::stderr());

    if let Some(path) = &config.file {
        let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
        dispatch = dispatch.chain(file);
    }

    dispatch.apply().context("Failed to install logger")?;
    Ok(())
}
