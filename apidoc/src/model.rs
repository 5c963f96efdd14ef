//! Data model for extracted API documentation — format-agnostic.

use crate::extract::strip_marker;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use thiserror::Error;

static RE_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([a-zA-Z0-9_]+) :: ").unwrap());

/// Loose banner shape: `#####   ARRAY   #####`.
static RE_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#+[[:blank:]]+(\S.*?)[[:blank:]]+#+$").unwrap());

/// A documented definition: signature line, description, usage transcripts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Definition {
    /// 0-based index of the block's first line in the source file
    pub index: usize,
    /// Signature line, e.g. `nth :: NonNegativeInteger -> Array a -> Maybe a`
    pub title: String,
    /// Description paragraph
    pub meta: String,
    /// One transcript per paragraph
    pub examples: Vec<String>,
}

impl Definition {
    /// Identifier in front of ` :: `.
    pub fn name(&self) -> Option<String> {
        lourdes::first_group_match(&RE_NAME, &self.title)
    }

    pub fn line_number(&self) -> usize {
        self.index + 1
    }
}

/// Why a comment block is not a definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockError {
    #[error("first line of the block was not found in the source")]
    LineNotFound,
    #[error("first line is not a `name :: Type` signature")]
    NotASignature,
    #[error("no description paragraph after the signature")]
    MissingDescription,
}

/// A comment block that did not parse as a definition, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnparsedBlock {
    pub lines: Vec<String>,
    pub reason: BlockError,
}

impl UnparsedBlock {
    /// Section title of a banner comment, if the block contains one.
    pub fn heading(&self) -> Option<String> {
        self.lines
            .iter()
            .map(|line| strip_marker(line))
            .find_map(|line| lourdes::first_group_match(&RE_HEADING, &line))
    }
}

/// One extracted block: a definition, or the raw lines that failed to parse.
pub type Entry = Result<Definition, UnparsedBlock>;

/// All entries of one source file, in file order.
#[derive(Debug, Default)]
pub struct ApiDoc {
    /// Source path as given on the command line (`-` for stdin)
    pub source: String,
    pub entries: Vec<Entry>,
}

impl ApiDoc {
    pub fn definitions(&self) -> impl Iterator<Item = &Definition> {
        self.entries.iter().filter_map(|entry| entry.as_ref().ok())
    }

    pub fn unparsed(&self) -> impl Iterator<Item = &UnparsedBlock> {
        self.entries.iter().filter_map(|entry| entry.as_ref().err())
    }
}
