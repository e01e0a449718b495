use std::fs::File;

use anyhow::Context;
use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode, WriteLogger};

use crate::config::Config;

/// Logs go to stderr, and at debug level to `--log-file` if one was given. Stdout belongs to the
/// game.
pub fn init(config: &Config) -> anyhow::Result<()> {
    let log_config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    loggers.push(TermLogger::new(
        config.log_level,
        log_config.clone(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ));
    if let Some(path) = &config.log_file {
        let file = File::create(path).with_context(|| format!("create log file {}", path.display()))?;
        loggers.push(WriteLogger::new(LevelFilter::Debug, log_config, file));
    }

    CombinedLogger::init(loggers).context("initialize logger")?;
    Ok(())
}
