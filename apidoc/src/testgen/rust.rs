//! Rust `#[test]` functions comparing `Debug` output.

use super::transcript::Step;
use super::{indent_body, TestTarget};
use regex::Regex;
use std::sync::LazyLock;

static RE_SETTLED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(resolution|rejection)\]: (.*)$").unwrap());

pub struct RustTarget;

impl TestTarget for RustTarget {
    fn render_step(&self, step: &Step) -> Vec<String> {
        match step {
            Step::Setup(statements) => statements.clone(),
            Step::Check { input, expected } => {
                vec![format!("assert_eq!(format!(\"{{:?}}\", {}), {:?});", input, expected)]
            }
            Step::AsyncCheck { input, expected } => vec![format!(
                "assert_eq!(format!(\"{{:?}}\", futures::executor::block_on({})), {:?});",
                input,
                settled(expected)
            )],
            Step::Malformed => vec!["panic!(\"could not build test\");".to_string()],
        }
    }

    fn render_case(&self, name: &str, body: &[String]) -> String {
        let mut lines = vec![
            "#[test]".to_string(),
            format!("fn {}_examples() {{", snake_case(name)),
        ];
        lines.extend(indent_body(body, "    "));
        lines.push("}".to_string());
        lines.join("\n")
    }
}

/// `[resolution]: X` → `Ok(X)`, `[rejection]: X` → `Err(X)`.
fn settled(expected: &str) -> String {
    match RE_SETTLED.captures(expected) {
        Some(caps) if &caps[1] == "resolution" => format!("Ok({})", &caps[2]),
        Some(caps) => format!("Err({})", &caps[2]),
        None => expected.to_string(),
    }
}

/// `splitEach` → `split_each`.
fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
