use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::filter::FilterMode;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Which filter semantics the session uses (word lists or single regex).
    pub filter_mode: FilterMode,
    /// Per-severity highlight colors consumed by the display layer.
    pub colors: ColorConfig,
}

/// One background color per canonical severity letter. The values are
/// opaque to the core; they pass straight through to the host's
/// highlight-color lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub trace: String,
    pub debug: String,
    pub info: String,
    pub warn: String,
    pub error: String,
    pub critical: String,
}

impl ViewerConfig {
    /// Load configuration from file or environment variables
    /// Priority: Environment Variables > Config File > Defaults
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = std::env::var("LOGVIEW_CONFIG_FILE")
            .unwrap_or_else(|_| "logview.toml".to_string());

        let mut config = if Path::new(&config_path).exists() {
            tracing::info!("Loading configuration from: {}", config_path);
            Self::from_file(&config_path)?
        } else {
            tracing::debug!("Config file not found at {}, using defaults", config_path);
            Self::default()
        };

        if let Ok(mode) = std::env::var("LOGVIEW_FILTER_MODE") {
            config.filter_mode = match mode.to_lowercase().as_str() {
                "word" => FilterMode::Word,
                "pattern" => FilterMode::Pattern,
                other => {
                    return Err(format!("unknown LOGVIEW_FILTER_MODE: {}", other).into());
                }
            };
        }

        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: ViewerConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        self.colors.validate()
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            filter_mode: FilterMode::Word,
            colors: ColorConfig::default(),
        }
    }
}

impl ColorConfig {
    pub fn validate(&self) -> Result<(), String> {
        let entries = [
            ("trace", &self.trace),
            ("debug", &self.debug),
            ("info", &self.info),
            ("warn", &self.warn),
            ("error", &self.error),
            ("critical", &self.critical),
        ];
        for (name, value) in entries {
            if value.is_empty() {
                return Err(format!("colors.{} must not be empty", name));
            }
        }
        Ok(())
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            trace: "rgba(255,255,255,0.05)".to_string(),
            debug: "rgba(50,127,186,0.2)".to_string(),
            info: "rgba(0,255,0,0.1)".to_string(),
            warn: "rgba(255,255,0,0.2)".to_string(),
            error: "rgba(176,55,66,0.2)".to_string(),
            critical: "rgba(197,15,31,0.2)".to_string(),
        }
    }
}
