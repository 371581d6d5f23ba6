//! log4rs initialisation.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

const CONSOLE_PATTERN: &str = "{d(%H:%M:%S)} {h({l:5})} {M} - {m}{n}";

/// Initialise logging from a log4rs YAML file, or log `info` to stderr when
/// the file is absent.
pub fn init_logging(log_config: &str) -> Result<(), Box<dyn Error>> {
    if Path::new(log_config).exists() {
        log4rs::init_file(log_config, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {log_config}: {e}"))?;
        log::debug!("logging configured from {log_config}");
        return Ok(());
    }

    log4rs::init_config(console_config()?)?;
    log::warn!("{log_config} not found, logging to stderr");
    Ok(())
}

fn console_config() -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(CONSOLE_PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Info))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_config_builds() {
        let config = console_config().expect("Console log config should build");
        assert_eq!(config.root().level(), LevelFilter::Info);
        assert_eq!(config.appenders().len(), 1);
    }
}
