pub mod analyzer;
pub mod template_service;

pub use analyzer::{analyze_bytes, analyze_image, AnalyzeError, AnalyzeOptions};
pub use template_service::{TemplateError, TemplateService};
