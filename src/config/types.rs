use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw and input poll cadence in milliseconds (default: 100).
    #[serde(default = "default_frame_rate_ms")]
    pub frame_rate_ms: u64,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Defaults to `<cache_dir>/guessr/guessr.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

pub const MIN_FRAME_RATE_MS: u64 = 16;
pub const MAX_FRAME_RATE_MS: u64 = 1000;

fn default_frame_rate_ms() -> u64 {
    100
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            frame_rate_ms: default_frame_rate_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl UiConfig {
    pub fn frame_rate(&self) -> Duration {
        Duration::from_millis(self.frame_rate_ms)
    }
}

impl LoggingConfig {
    /// Where log lines go when nothing overrides it.
    pub fn default_file() -> PathBuf {
        let cache_dir = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
        cache_dir.join("guessr").join("guessr.log")
    }

    pub fn resolved_file(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(Self::default_file)
    }
}
