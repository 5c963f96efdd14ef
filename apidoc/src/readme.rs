//! Splicing the rendered API section into a README.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Heading that owns the generated section. Everything below it is replaced.
pub const API_HEADING: &str = "## API";

/// Outcome of [`sync`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Unchanged,
    Updated,
    /// `--check` found a stale README; nothing was written
    Stale,
}

/// Replace everything from the first `## API` line on with `api`.
///
/// Without an `## API` line the section is appended to the whole text.
pub fn splice(readme: &str, api: &str) -> String {
    let lines: Vec<&str> = readme.lines().collect();
    let keep = lourdes::index_of(&API_HEADING, &lines).unwrap_or(lines.len());

    let mut out: Vec<&str> = lines[..keep].to_vec();
    if keep == lines.len() && out.last().is_some_and(|line| !line.is_empty()) {
        out.push("");
    }
    out.extend([API_HEADING, "", api, ""]);

    out.iter().map(|line| format!("{}\n", line)).collect()
}

/// Rewrite `path` with `api` spliced in. A missing README is created.
pub fn sync(path: &Path, api: &str, check: bool) -> Result<Outcome> {
    let current = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e).with_context(|| format!("failed to read {}", path.display())),
    };

    let updated = splice(&current, api);
    if updated == current {
        return Ok(Outcome::Unchanged);
    }
    if check {
        return Ok(Outcome::Stale);
    }

    fs::write(path, &updated).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(Outcome::Updated)
}
