//! Definition-block extraction from `//` comment blocks.
//!
//! Pipeline: split the source into lines, keep the comment lines, group
//! them into definition blocks ([`group`]), then parse each block into a
//! [`Definition`](crate::model::Definition) or an
//! [`UnparsedBlock`](crate::model::UnparsedBlock) ([`bundle`]).

pub mod bundle;
pub mod group;

use crate::model::{ApiDoc, Entry};
use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

/// Leading comment marker (`//`, `///` or `//!`) with surrounding blanks.
static RE_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*//[/!]?\s*").unwrap());

/// A comment line starts with `//` after optional indentation. Trailing
/// comments after code and `//` inside strings do not count.
pub fn is_comment_line(line: &str) -> bool {
    RE_MARKER.is_match(line)
}

/// Remove the leading comment marker and the whitespace around it.
///
/// Lines that do not start with a marker come back unchanged.
pub fn strip_marker(line: &str) -> String {
    lourdes::replace(&RE_MARKER, "", line)
}

/// Extract every comment block of `content`, in source order.
pub fn extract(content: &str) -> Vec<Entry> {
    let lines: Vec<&str> = content.lines().collect();
    let comments: Vec<&str> = lines
        .iter()
        .copied()
        .filter(|line| is_comment_line(line))
        .collect();

    group::group_on_definitions(&comments)
        .iter()
        .map(|block| bundle::parse_block(block, &lines))
        .collect()
}

/// Read and extract a source file.
pub fn extract_file(path: &Path) -> Result<ApiDoc> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let doc = ApiDoc {
        source: path.to_string_lossy().to_string(),
        entries: extract(&content),
    };
    debug!(
        source = %doc.source,
        definitions = doc.definitions().count(),
        unparsed = doc.unparsed().count(),
        "extracted"
    );
    Ok(doc)
}
