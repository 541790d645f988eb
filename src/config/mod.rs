//! Configuration loading.
//!
//! The config file is optional. Every section has defaults, so a
//! partial file only overrides what it names.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LoggingConfig, UiConfig, MAX_FRAME_RATE_MS, MIN_FRAME_RATE_MS};
