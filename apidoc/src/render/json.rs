//! JSON renderer — structured output for tooling integration.

use crate::model::*;
use crate::render::{RenderOptions, Renderer};
use anyhow::{Context, Result};
use serde::Serialize;

pub struct JsonRenderer;

#[derive(Serialize)]
struct JsonDoc<'a> {
    source: &'a str,
    definitions: Vec<JsonDefinition<'a>>,
    unparsed: Vec<JsonUnparsed<'a>>,
}

#[derive(Serialize)]
struct JsonDefinition<'a> {
    name: Option<String>,
    permalink: String,
    #[serde(flatten)]
    definition: &'a Definition,
}

#[derive(Serialize)]
struct JsonUnparsed<'a> {
    heading: Option<String>,
    #[serde(flatten)]
    block: &'a UnparsedBlock,
}

impl Renderer for JsonRenderer {
    fn render(&self, docs: &[ApiDoc], options: &RenderOptions) -> Result<String> {
        let docs: Vec<JsonDoc> = docs
            .iter()
            .map(|doc| JsonDoc {
                source: &doc.source,
                definitions: doc
                    .definitions()
                    .map(|definition| JsonDefinition {
                        name: definition.name(),
                        permalink: options.permalink(&doc.source, definition.line_number()),
                        definition,
                    })
                    .collect(),
                unparsed: doc
                    .unparsed()
                    .map(|block| JsonUnparsed {
                        heading: block.heading(),
                        block,
                    })
                    .collect(),
            })
            .collect();
        serde_json::to_string_pretty(&docs).context("failed to serialize documentation")
    }
}
