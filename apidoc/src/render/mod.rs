//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod markdown;

use crate::model::ApiDoc;
use anyhow::{anyhow, Result};

/// Placeholder in the base URL template replaced by the source path.
pub const FILE_PLACEHOLDER: &str = "${file}";

/// Rendering knobs shared by every format.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Permalink template; `${file}` expands to the source path
    pub base_url: String,
    /// Language tag of fenced example blocks
    pub lang: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            base_url: FILE_PLACEHOLDER.to_string(),
            lang: "js".to_string(),
        }
    }
}

impl RenderOptions {
    /// `<base-url>#L<line>` for a 1-based source line.
    pub fn permalink(&self, source: &str, line: usize) -> String {
        format!("{}#L{}", self.base_url.replace(FILE_PLACEHOLDER, source), line)
    }
}

/// Trait for rendering extracted documents into a specific output format.
pub trait Renderer {
    fn render(&self, docs: &[ApiDoc], options: &RenderOptions) -> Result<String>;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use markdown or json", format)),
    }
}
