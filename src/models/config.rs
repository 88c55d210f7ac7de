use crate::assets::AssetLoader;
use serde::Deserialize;
use skin_tone::{Analyzer, AnalyzerConfig, ConfigError};

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Skin thresholds and undertone margin
    #[serde(default)]
    pub analysis: AnalyzerConfig,
}

/// HTTP server settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    /// Largest accepted upload in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024 // 10 MiB
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    let config: Self = config;
                    tracing::info!(
                        source = %loader.config_source(),
                        min_skin_pixels = config.analysis.min_skin_pixels,
                        undertone_margin = config.analysis.undertone_margin,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Build the analysis pipeline described by this config
    pub fn analyzer(&self) -> Result<Analyzer, ConfigError> {
        Analyzer::new(&self.analysis)
    }
}
