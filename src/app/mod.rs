//! Application glue module
//!
//! Configuration and logging setup shared by the programs.

mod config;
mod logging;

pub use config::{default_config_path, Config, ConfigError, PrevEolMode, DEFAULT_ERROR_COLOR};
pub use logging::init_logging;
