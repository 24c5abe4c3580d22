//! Session configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{FocusError, FocusResult};

/// Global session configuration, read once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Capture geometry and pacing shared by both feeds.
    pub capture: CaptureDefaults,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Default capture parameters. Width and height size the weight mask and
/// every derived buffer; fps only paces the external tick source.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CaptureDefaults {
    /// Capture width in pixels.
    pub width: u32,

    /// Capture height in pixels.
    pub height: u32,

    /// Tick rate for live runs.
    pub fps: u32,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "focuspair=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            capture: CaptureDefaults::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for CaptureDefaults {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            fps: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl SessionConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {:?}: {}", config_path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Save config to the standard location.
    pub fn save(&self) -> Result<(), std::io::Error> {
        let config_path = config_file_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(config_path, json)
    }

    /// Reject configurations that cannot produce a valid session.
    ///
    /// A zero capture dimension would make the weight mask degenerate and
    /// divide by zero downstream, so it is refused here, before any tick.
    pub fn validate(&self) -> FocusResult<()> {
        if self.capture.width == 0 || self.capture.height == 0 {
            return Err(FocusError::config(format!(
                "capture dimensions must be non-zero, got {}x{}",
                self.capture.width, self.capture.height
            )));
        }
        if self.capture.fps == 0 {
            return Err(FocusError::config("capture fps must be non-zero"));
        }
        Ok(())
    }
}

/// Standard config file location.
fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("focuspair").join("config.json")
}
