use std::error::Error;
use std::fs::File;
use std::path::Path;

use log::LevelFilter;

/// Level used until the configuration has been read.
const STARTUP_LEVEL: LevelFilter = LevelFilter::Info;

/// Installs the process logger before anything else runs, so configuration
/// loading is logged too. The logger itself accepts every level; the global
/// max level does the filtering and is adjusted by [`set_level`].
pub fn init(log_file: Option<&Path>) -> Result<(), Box<dyn Error>> {
    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            simplelog::WriteLogger::init(LevelFilter::Trace, simplelog::Config::default(), file)?;
        }
        None => {
            env_logger::Builder::new()
                .filter_level(LevelFilter::Trace)
                .parse_default_env()
                .try_init()?;
        }
    }
    if !env_overrides(log_file) {
        log::set_max_level(STARTUP_LEVEL);
    }
    Ok(())
}

/// Applies the configured level. `RUST_LOG` wins on the terminal logger.
pub fn set_level(level: &str, log_file: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let filter: LevelFilter = level.parse()?;
    if !env_overrides(log_file) {
        log::set_max_level(filter);
    }
    Ok(())
}

fn env_overrides(log_file: Option<&Path>) -> bool {
    log_file.is_none() && std::env::var_os("RUST_LOG").is_some()
}
