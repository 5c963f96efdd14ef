//! README-style markdown renderer.
//!
//! Definitions become `####` sections linking back to their source line;
//! banner comments become `###` headings; other comment noise is dropped.

use crate::model::*;
use crate::render::{RenderOptions, Renderer};
use anyhow::Result;
use tracing::debug;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, docs: &[ApiDoc], options: &RenderOptions) -> Result<String> {
        let sections: Vec<String> = docs
            .iter()
            .flat_map(|doc| {
                doc.entries
                    .iter()
                    .filter_map(move |entry| render_entry(&doc.source, entry, options))
            })
            .collect();
        Ok(sections.join("\n\n"))
    }
}

fn render_entry(source: &str, entry: &Entry, options: &RenderOptions) -> Option<String> {
    match entry {
        Ok(def) => Some(render_definition(source, def, options)),
        Err(block) => {
            let heading = block.heading();
            if heading.is_none() {
                debug!(source, reason = %block.reason, first = ?block.lines.first(), "dropping block");
            }
            heading.map(|title| format!("### {}", capitalize(&title)))
        }
    }
}

/// Render a single definition.
fn render_definition(source: &str, def: &Definition, options: &RenderOptions) -> String {
    let url = options.permalink(source, def.line_number());
    let mut parts = vec![
        format!("#### <a href=\"{}\">`{}`</a>", url, def.title),
        def.meta.clone(),
    ];
    if !def.examples.is_empty() {
        parts.push(format!(
            "```{}\n{}\n```",
            options.lang,
            def.examples.join("\n\n")
        ));
    }
    parts.join("\n\n")
}

/// `ARRAY` → `Array`, `point free` → `Point free`.
fn capitalize(title: &str) -> String {
    let mut chars = title.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
