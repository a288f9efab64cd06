//! FAQ bot app glue: configuration, logging, and the single message dispatcher
//! a presentation layer drives.
mod app;
pub mod config;
mod effects;
mod logging;

pub use app::App;
pub use config::{load_config, AppConfig, ConfigError, API_URL_ENV, CONFIG_FILENAME};
pub use effects::{translate_event, EffectRunner};
pub use engine_logging::LogDestination;
pub use logging::init_logging;
