//! Test-case generation from definition examples.
//!
//! Each example paragraph is read as a transcript ([`transcript`]) and
//! rendered into assertion statements by a [`TestTarget`].

pub mod ava;
pub mod rust;
pub mod transcript;

use crate::model::{ApiDoc, Definition};
use anyhow::{anyhow, Result};
use transcript::{parse_transcript, Step};

/// Name used when a title has no identifier in front of ` :: `.
pub const UNKNOWN_NAME: &str = "Unknown";

/// A test framework the transcripts are rendered for.
pub trait TestTarget {
    /// Statements for one transcript. Entries may span several lines.
    fn render_step(&self, step: &Step) -> Vec<String>;

    /// Wrap a body into one named test case.
    fn render_case(&self, name: &str, body: &[String]) -> String;
}

/// Create a target for the given name.
pub fn create_target(name: &str) -> Result<Box<dyn TestTarget>> {
    match name {
        "ava" => Ok(Box::new(ava::AvaTarget)),
        "rust" => Ok(Box::new(rust::RustTarget)),
        _ => Err(anyhow!("unknown target: {}. Use ava or rust", name)),
    }
}

/// One test case covering every example of `def`.
pub fn build_case(target: &dyn TestTarget, def: &Definition) -> String {
    let name = def.name().unwrap_or_else(|| UNKNOWN_NAME.to_string());
    let body: Vec<String> = def
        .examples
        .iter()
        .map(|example| parse_transcript(example))
        .flat_map(|step| target.render_step(&step))
        .collect();
    target.render_case(&name, &body)
}

/// Whole test file: `prefixes` verbatim, then one case per definition.
pub fn build_suite(target: &dyn TestTarget, docs: &[ApiDoc], prefixes: &[String]) -> String {
    let cases: Vec<String> = docs
        .iter()
        .flat_map(ApiDoc::definitions)
        .map(|def| build_case(target, def))
        .collect();

    let mut parts: Vec<String> = prefixes.to_vec();
    parts.push(cases.join("\n\n"));
    parts.join("\n")
}

/// Indent every line of every statement by `indent`.
fn indent_body(body: &[String], indent: &str) -> Vec<String> {
    body.iter()
        .flat_map(|statement| statement.split('\n'))
        .map(|line| format!("{}{}", indent, line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_either() -> Definition {
        Definition {
            index: 0,
            title: "toEither :: (a -> Boolean) -> (a -> b) -> a -> Either b a".to_string(),
            meta: "Convert to Either depending on predicate".to_string(),
            examples: vec![
                "> const toEven = toEither (x => x % 2 === 0)\n.                         (x => `${x} is not a even number`)".to_string(),
                "> toEven (1)\nLeft (\"1 is not a even number\")".to_string(),
                "> toEven (2)\nRight (2)".to_string(),
            ],
        }
    }

    #[test]
    fn ava_case() {
        let case = build_case(&ava::AvaTarget, &to_either());
        assert_eq!(
            case,
            "test ('toEither', async t => {\n\
             \x20 const toEven = toEither (x => x % 2 === 0)\n\
             \x20  (x => `${x} is not a even number`);\n\
             \x20 t.deepEqual (showIfSanctuaryValue (toEven (1)), parseExpected ('Left (\"1 is not a even number\")'));\n\
             \x20 t.deepEqual (showIfSanctuaryValue (toEven (2)), parseExpected ('Right (2)'));\n\
             });"
        );
    }

    #[test]
    fn unknown_name() {
        let def = Definition {
            title: "(weird) :: a".to_string(),
            examples: vec!["> x\n1".to_string()],
            ..to_either()
        };
        assert!(build_case(&ava::AvaTarget, &def).starts_with("test ('Unknown', async t => {"));
    }

    #[test]
    fn suite_skips_unparsed_and_keeps_prefixes() {
        let doc = ApiDoc {
            source: "index.mjs".to_string(),
            entries: vec![
                Err(crate::model::UnparsedBlock {
                    lines: vec!["// #####   EITHER   #####".to_string()],
                    reason: crate::model::BlockError::NotASignature,
                }),
                Ok(to_either()),
                Ok(to_either()),
            ],
        };
        let prefixes = vec!["import test from 'ava';".to_string(), "// helpers".to_string()];
        let suite = build_suite(&ava::AvaTarget, &[doc], &prefixes);

        assert!(suite.starts_with("import test from 'ava';\n// helpers\ntest ('toEither'"));
        assert_eq!(suite.matches("test ('toEither'").count(), 2);
        assert!(suite.contains("});\n\ntest ("));
        assert!(!suite.contains("EITHER"));
    }

    #[test]
    fn targets_by_name() {
        assert!(create_target("ava").is_ok());
        assert!(create_target("rust").is_ok());
        let err = create_target("jest").err().unwrap();
        assert!(err.to_string().contains("unknown target"));
    }
}
