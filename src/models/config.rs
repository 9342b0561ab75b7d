use crate::assets::AssetLoader;
use serde::Deserialize;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Quantizer tuning
    #[serde(default)]
    pub quantizer: QuantizerConfig,

    /// Upload limits
    #[serde(default)]
    pub upload: UploadConfig,
}

/// Tuning for the quantization engine and result post-processing
#[derive(Debug, Deserialize, Clone)]
pub struct QuantizerConfig {
    /// Low bits discarded per channel; smaller means finer color
    /// distinctions, larger means coarser and faster
    #[serde(default = "default_shift")]
    pub shift: u32,

    /// Output channel ceiling (255 for standard display color)
    #[serde(default = "default_scale")]
    pub scale: f64,

    /// Upper bound on ranked entries a request may ask for
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Entries covering less than this percentage of the image are
    /// dropped from results
    #[serde(default = "default_min_ratio")]
    pub min_ratio: f64,
}

fn default_shift() -> u32 {
    13
}

fn default_scale() -> f64 {
    255.0
}

fn default_max_results() -> usize {
    10
}

fn default_min_ratio() -> f64 {
    1.0
}

impl Default for QuantizerConfig {
    fn default() -> Self {
        Self {
            shift: default_shift(),
            scale: default_scale(),
            max_results: default_max_results(),
            min_ratio: default_min_ratio(),
        }
    }
}

/// Upload handling limits
#[derive(Debug, Deserialize, Clone)]
pub struct UploadConfig {
    /// Maximum accepted request body size in bytes
    #[serde(default = "default_max_bytes")]
    pub max_bytes: usize,
}

fn default_max_bytes() -> usize {
    10 * 1024 * 1024
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_bytes: default_max_bytes(),
        }
    }
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                Ok(config) => {
                    tracing::info!(
                        shift = config.quantizer.shift,
                        max_results = config.quantizer.max_results,
                        min_ratio = config.quantizer.min_ratio,
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
}
