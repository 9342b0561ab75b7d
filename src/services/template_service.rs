use std::sync::Arc;
use tera::{Context, Tera};

use crate::assets::AssetLoader;

/// Error type for template rendering
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Template error: {0}")]
    Tera(#[from] tera::Error),

    #[error("Template not found: {0}")]
    NotFound(String),
}

/// Service for rendering page templates with Tera
pub struct TemplateService {
    assets: Arc<AssetLoader>,
}

impl TemplateService {
    /// Create a new template service
    pub fn new(assets: Arc<AssetLoader>) -> Self {
        tracing::info!(
            templates = AssetLoader::list_templates().len(),
            "Template service initialized"
        );
        Self { assets }
    }

    /// Render a template with the given data.
    /// Templates are loaded fresh per render so an external
    /// TEMPLATES_DIR supports live editing.
    pub fn render(&self, name: &str, data: &serde_json::Value) -> Result<String, TemplateError> {
        let content = self
            .assets
            .read_template(name)
            .map_err(|_| TemplateError::NotFound(name.to_string()))?;

        let mut tera = Tera::default();
        tera.add_raw_template(name, &content)?;

        let context = Context::from_serialize(data)?;
        let html = tera.render(name, &context)?;
        Ok(html)
    }
}
