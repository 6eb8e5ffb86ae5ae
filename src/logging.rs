use std::path::Path;

use anyhow::Context;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

pub const CONFIG_FILE: &str = "log4rs.yml";
const PATTERN: &str = "{d(%H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Loads `log4rs.yml` when present, otherwise logs `info` and up to stderr.
pub fn init() -> anyhow::Result<()> {
    if Path::new(CONFIG_FILE).exists() {
        return log4rs::init_file(CONFIG_FILE, Default::default())
            .context("failed to load logging config file");
    }

    log4rs::init_config(default_config()?).context("failed to initialize logging")?;
    Ok(())
}

fn default_config() -> anyhow::Result<Config> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();

    Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Info))
        .context("failed to build default logging config")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_builds() {
        let config = default_config().unwrap();
        assert_eq!(config.root().level(), LevelFilter::Info);
        assert_eq!(config.appenders().len(), 1);
    }
}
