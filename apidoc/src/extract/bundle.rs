//! Parsing one definition block into its structured fields.
//!
//! After marker stripping, a block reads as blank-line separated
//! paragraphs:
//!
//! ```text
//! nth :: NonNegativeInteger -> Array a -> Maybe a    <- title (first line)
//!
//! Get the N th elements of array                      <- meta
//!
//! > nth (0) ([])                                      <- examples[0]
//! Nothing
//! ```

use super::strip_marker;
use crate::model::{BlockError, Definition, Entry, UnparsedBlock};
use regex::Regex;
use std::sync::LazyLock;

/// `name :: Type` optionally followed by ` -> Type` segments.
static RE_SIGNATURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9]+ :: [A-Za-z0-9() ]+( -> [A-Za-z0-9() ]+)*").unwrap()
});

const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Parse `block` (raw lines) against the full `source` it was taken from.
///
/// Fails with the raw lines unless index, title, description and examples
/// can all be derived.
pub fn parse_block(block: &[&str], source: &[&str]) -> Entry {
    let fail = |reason| UnparsedBlock {
        lines: block.iter().map(|line| line.to_string()).collect(),
        reason,
    };

    let index = resolve_index(block, source).ok_or_else(|| fail(BlockError::LineNotFound))?;
    let title = parse_title(block).ok_or_else(|| fail(BlockError::NotASignature))?;

    let text = block
        .iter()
        .map(|line| strip_marker(line))
        .collect::<Vec<_>>()
        .join("\n");
    let paragraphs: Vec<&str> = text.split(PARAGRAPH_SEPARATOR).collect();

    let meta = lourdes::nth(1, &paragraphs)
        .map(|paragraph| paragraph.to_string())
        .ok_or_else(|| fail(BlockError::MissingDescription))?;

    let examples = paragraphs
        .iter()
        .skip(2)
        .map(|paragraph| paragraph.trim_end_matches('\n'))
        .filter(|paragraph| !paragraph.is_empty())
        .map(str::to_string)
        .collect();

    Ok(Definition {
        index,
        title,
        meta,
        examples,
    })
}

/// Position of the block's first raw line in `source`, by exact equality.
pub fn resolve_index(block: &[&str], source: &[&str]) -> Option<usize> {
    lourdes::nth(0, block).and_then(|first| lourdes::index_of(first, source))
}

/// Stripped first line, when it has the shape of a signature.
fn parse_title(block: &[&str]) -> Option<String> {
    lourdes::nth(0, block)
        .map(|first| strip_marker(first))
        .and_then(|title| lourdes::to_maybe(|title: &String| RE_SIGNATURE.is_match(title), title))
}
