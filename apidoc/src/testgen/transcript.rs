//! Reading an example paragraph as an interactive transcript.
//!
//! ```text
//! > const toOdd = toFluture (x => x % 2 !== 0)     <- input
//! .                         (x => `${x} is odd`)   <- continuation
//!
//! > toEither (isEven) (identity) (2)               <- input
//! Right (2)                                        <- expected output
//! ```

use regex::Regex;
use std::sync::LazyLock;

const PROMPT: &str = "> ";
const CONTINUATION: char = '.';

static RE_CONTINUATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\. +").unwrap());

static RE_SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" +").unwrap());

/// `fork (log ('rejection')) (log ('resolution'))`, spacing optional.
static RE_ASYNC_IDIOM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"fork ?\(log ?\('rejection'\)\) ?\(log ?\('resolution'\)\)").unwrap()
});

static RE_ASYNC_TARGET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^fork *\(log *\('rejection'\)\) *\(log *\('resolution'\)\) *\((.*)\)").unwrap()
});

/// One transcript, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Statements run before the checks, each ending in `;`
    Setup(Vec<String>),
    /// Evaluate `input`, compare with `expected`
    Check { input: String, expected: String },
    /// Settle the future built by `input`, compare the outcome with `expected`
    AsyncCheck { input: String, expected: String },
    /// Looks like a check but no input could be recovered
    Malformed,
}

/// Classify one example paragraph.
pub fn parse_transcript(paragraph: &str) -> Step {
    let lines: Vec<&str> = paragraph.split('\n').collect();
    match lines.split_last() {
        Some((last, inputs)) if is_output(last) => parse_check(inputs, last),
        _ => Step::Setup(setup_statements(&lines)),
    }
}

/// Expected-output lines are anything but inputs and continuations.
fn is_output(line: &str) -> bool {
    !line.is_empty() && !line.starts_with('>') && !line.starts_with(CONTINUATION)
}

fn parse_check(inputs: &[&str], expected: &str) -> Step {
    let input = join_instruction(inputs).replacen(PROMPT, "", 1);
    if input.trim().is_empty() {
        return Step::Malformed;
    }
    let expected = expected.to_string();

    if !RE_ASYNC_IDIOM.is_match(&input) {
        return Step::Check { input, expected };
    }
    match lourdes::first_group_match(&RE_ASYNC_TARGET, &input) {
        Some(input) => Step::AsyncCheck { input, expected },
        None => Step::Malformed,
    }
}

/// Fold continuation lines into their input and collapse runs of spaces.
fn join_instruction(lines: &[&str]) -> String {
    let joined = lines.join("\n");
    let folded = RE_CONTINUATION.replace_all(&joined, "");
    RE_SPACES.replace_all(&folded, " ").into_owned()
}

/// Split at every prompt line, one statement per group.
fn setup_statements(lines: &[&str]) -> Vec<String> {
    split_on_prompt(lines)
        .iter()
        .map(|group| {
            let body: Vec<&str> = group.iter().map(|line| strip_continuation(line)).collect();
            let statement = join_instruction(&body);
            let statement = statement.strip_prefix(PROMPT).unwrap_or(&statement);
            statement.trim_end().trim_end_matches(';').to_string()
        })
        .filter(|statement| !statement.is_empty())
        .map(|statement| format!("{};", statement))
        .collect()
}

fn split_on_prompt<'a>(lines: &[&'a str]) -> Vec<Vec<&'a str>> {
    let mut groups: Vec<Vec<&'a str>> = Vec::new();
    for &line in lines {
        match groups.last_mut() {
            Some(group) if !line.starts_with(PROMPT) => group.push(line),
            _ => groups.push(vec![line]),
        }
    }
    groups
}

fn strip_continuation(line: &str) -> &str {
    line.strip_prefix(". ")
        .or_else(|| line.strip_prefix(CONTINUATION))
        .unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(input: &str, expected: &str) -> Step {
        Step::Check {
            input: input.to_string(),
            expected: expected.to_string(),
        }
    }

    #[test]
    fn simple_check() {
        assert_eq!(parse_transcript("> nth (0) ([])\nNothing"), check("nth (0) ([])", "Nothing"));
    }

    #[test]
    fn spaces_collapse() {
        assert_eq!(
            parse_transcript("> replace  (/bob/)   ('john') ('hello bob')\n\"hello john\""),
            check("replace (/bob/) ('john') ('hello bob')", "\"hello john\"")
        );
    }

    #[test]
    fn continuation_folds_into_input() {
        assert_eq!(
            parse_transcript("> f (1)\n.   (2)\n3"),
            check("f (1)(2)", "3")
        );
    }

    #[test]
    fn async_check() {
        let step = parse_transcript(
            "> fork (log ('rejection')) (log ('resolution')) (toOdd (2))\n[rejection]: \"2 is not a odd number\"",
        );
        assert_eq!(
            step,
            Step::AsyncCheck {
                input: "toOdd (2)".to_string(),
                expected: "[rejection]: \"2 is not a odd number\"".to_string(),
            }
        );
    }

    #[test]
    fn async_check_without_spaces() {
        let step = parse_transcript("> fork(log('rejection'))(log('resolution'))(f1)\n[resolution]: 1");
        assert_eq!(
            step,
            Step::AsyncCheck {
                input: "f1".to_string(),
                expected: "[resolution]: 1".to_string(),
            }
        );
    }

    #[test]
    fn async_idiom_without_target_is_malformed() {
        let step = parse_transcript("> fork (log ('rejection')) (log ('resolution')) f1\n[resolution]: 1");
        assert_eq!(step, Step::Malformed);
    }

    #[test]
    fn output_without_input_is_malformed() {
        assert_eq!(parse_transcript("Nothing"), Step::Malformed);
    }

    #[test]
    fn single_setup_statement() {
        assert_eq!(
            parse_transcript("> const firstGroupMatchExample = firstGroupMatch (/hello ([a-z]*)!/);"),
            Step::Setup(vec![
                "const firstGroupMatchExample = firstGroupMatch (/hello ([a-z]*)!/);".to_string()
            ])
        );
    }

    #[test]
    fn setup_with_continuations() {
        let paragraph = "> const toEven = toEither (x => x % 2 === 0)\n\
                         .                         (x => `${x} is not a even number`)";
        assert_eq!(
            parse_transcript(paragraph),
            Step::Setup(vec![
                "const toEven = toEither (x => x % 2 === 0)\n (x => `${x} is not a even number`);"
                    .to_string()
            ])
        );
    }

    #[test]
    fn setup_splits_on_prompts() {
        let paragraph = "> const f1 = eitherToFluture (S.Right (1))\n> const f2 = eitherToFluture (S.Left (\"error\"))";
        assert_eq!(
            parse_transcript(paragraph),
            Step::Setup(vec![
                "const f1 = eitherToFluture (S.Right (1));".to_string(),
                "const f2 = eitherToFluture (S.Left (\"error\"));".to_string(),
            ])
        );
    }

    #[test]
    fn setup_closing_bracket_continuation() {
        let paragraph = "> const condExemple = cond ([\n.   S.Pair (isUpper) (S.toLower),\n. ])";
        assert_eq!(
            parse_transcript(paragraph),
            Step::Setup(vec![
                "const condExemple = cond ([\n S.Pair (isUpper) (S.toLower),\n])".to_string() + ";"
            ])
        );
    }
}
