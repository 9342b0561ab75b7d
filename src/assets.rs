//! Asset loading with embedded fallbacks
//!
//! Templates and the default config ship inside the binary via
//! `rust-embed`. Setting `TEMPLATES_DIR` or `CONFIG_FILE` overrides an
//! asset from the filesystem; anything not found there falls back to
//! the embedded copy.

use rust_embed::RustEmbed;
use std::io;
use std::path::PathBuf;

/// Embedded page templates
#[derive(RustEmbed)]
#[folder = "templates/"]
#[include = "*.html"]
struct EmbeddedTemplates;

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "."]
#[include = "config.yaml"]
struct EmbeddedConfig;

/// Asset loader with optional filesystem override
pub struct AssetLoader {
    /// External templates directory (from TEMPLATES_DIR env var)
    templates_dir: Option<PathBuf>,
    /// External config file path (from CONFIG_FILE env var)
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader.
    ///
    /// Paths should be `Some` only if the corresponding env var was
    /// set. If `None`, embedded assets are used exclusively.
    pub fn new(templates_dir: Option<PathBuf>, config_file: Option<PathBuf>) -> Self {
        Self {
            templates_dir,
            config_file,
        }
    }

    /// Create a loader from the TEMPLATES_DIR / CONFIG_FILE env vars.
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("TEMPLATES_DIR").ok().map(PathBuf::from),
            std::env::var("CONFIG_FILE").ok().map(PathBuf::from),
        )
    }

    /// Read a template by name, preferring the external directory.
    pub fn read_template(&self, name: &str) -> io::Result<String> {
        if let Some(dir) = &self.templates_dir {
            let path = dir.join(name);
            if path.exists() {
                return std::fs::read_to_string(&path);
            }
        }

        EmbeddedTemplates::get(name)
            .map(|f| String::from_utf8_lossy(f.data.as_ref()).into_owned())
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, format!("template not found: {name}"))
            })
    }

    /// Read the config file, preferring the external path.
    pub fn read_config_string(&self) -> io::Result<String> {
        if let Some(path) = &self.config_file {
            if path.exists() {
                return std::fs::read_to_string(path);
            }
        }

        EmbeddedConfig::get("config.yaml")
            .map(|f| String::from_utf8_lossy(f.data.as_ref()).into_owned())
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "embedded config.yaml missing"))
    }

    /// Names of all embedded templates.
    pub fn list_templates() -> Vec<String> {
        EmbeddedTemplates::iter().map(|f| f.to_string()).collect()
    }
}
