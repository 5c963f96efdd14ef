//! `ava` test cases against the sanctuary `show` helpers.
//!
//! The prefix file is expected to provide `showIfSanctuaryValue`,
//! `parseExpected` and `forkLog`.

use super::transcript::Step;
use super::{indent_body, TestTarget};

pub struct AvaTarget;

impl TestTarget for AvaTarget {
    fn render_step(&self, step: &Step) -> Vec<String> {
        match step {
            Step::Setup(statements) => statements.clone(),
            Step::Check { input, expected } => vec![format!(
                "t.deepEqual (showIfSanctuaryValue ({}), parseExpected ('{}'));",
                input,
                quote(expected)
            )],
            Step::AsyncCheck { input, expected } => vec![format!(
                "t.deepEqual (showIfSanctuaryValue (await forkLog ({})), parseExpected ('{}'));",
                input,
                quote(expected)
            )],
            Step::Malformed => vec!["throw new Error('Could not build test');".to_string()],
        }
    }

    fn render_case(&self, name: &str, body: &[String]) -> String {
        let mut lines = vec![format!("test ('{}', async t => {{", quote(name))];
        lines.extend(indent_body(body, "  "));
        lines.push("});".to_string());
        lines.join("\n")
    }
}

/// Escape for a single-quoted JS string.
fn quote(text: &str) -> String {
    text.replace('\\', "\\\\").replace('\'', "\\'")
}
