//! Logger setup for hosts embedding the FAQ bot.
//!
//! Defaults to the terminal plus `./faqbot.log` in the current working directory.

use engine_logging::{engine_info, LogDestination};
use log::LevelFilter;

/// Installs the global logger. Returns false if nothing was installed, e.g.
/// because a logger already exists or the log file could not be created.
pub fn init_logging(destination: LogDestination, level: LevelFilter) -> bool {
    let described = match &destination {
        LogDestination::File(path) => format!("file {}", path.display()),
        LogDestination::Terminal => "terminal".to_string(),
        LogDestination::Both(path) => format!("terminal and file {}", path.display()),
    };
    let installed = engine_logging::initialize(destination, level);
    if installed {
        engine_info!("Logging to {} at level {}", described, level);
    }
    installed
}
