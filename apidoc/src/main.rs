//! apidoc — regenerate API documentation and example tests from `//`
//! comment blocks.
//!
//! A definition is documented by a comment block of the form:
//!
//! ```text
//! // nth :: NonNegativeInteger -> Array a -> Maybe a
//! //
//! // Get the N th elements of array
//! //
//! // > nth (1) ([1, 2, 3])
//! // Just (2)
//! ```
//!
//! - `apidoc extract lib.mjs` prints the rendered documentation
//! - `apidoc readme lib.mjs --readme README.md` rewrites the `## API` section
//! - `apidoc tests lib.mjs -o lib.test.mjs -p prefix.txt` writes example tests

mod extract;
mod model;
mod readme;
mod render;
mod testgen;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use render::Renderer;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "apidoc",
    about = "Generate API documentation and example tests from signature comment blocks"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the documentation of the given files to stdout
    Extract {
        /// Input files (glob patterns supported). If omitted, reads from stdin.
        files: Vec<String>,

        /// Output format: markdown (default), json
        #[arg(short = 'f', long, default_value = "markdown")]
        format: String,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Rewrite the `## API` section of a README
    Readme {
        /// Input files (glob patterns supported)
        #[arg(required = true)]
        files: Vec<String>,

        /// README to update
        #[arg(short = 'r', long, default_value = "README.md")]
        readme: PathBuf,

        /// Fail instead of writing when the README is out of date
        #[arg(long)]
        check: bool,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Generate a test file from the examples of every definition
    Tests {
        /// Input files (glob patterns supported)
        #[arg(required = true)]
        files: Vec<String>,

        /// Output test file
        #[arg(short = 'o', long)]
        output: PathBuf,

        /// Test framework: ava (default), rust
        #[arg(short = 't', long, default_value = "ava")]
        target: String,

        /// Files copied verbatim ahead of the generated tests, in order
        #[arg(short = 'p', long)]
        prefix: Vec<PathBuf>,
    },
}

#[derive(Args)]
struct RenderArgs {
    /// Permalink base URL. ${file} is replaced by the source path.
    #[arg(long, default_value = render::FILE_PLACEHOLDER)]
    base_url: String,

    /// Language tag of example code blocks
    #[arg(long, default_value = "js")]
    lang: String,
}

impl From<RenderArgs> for render::RenderOptions {
    fn from(args: RenderArgs) -> Self {
        Self {
            base_url: args.base_url,
            lang: args.lang,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Extract {
            files,
            format,
            render,
        } => extract_mode(&files, &format, render.into()),
        Command::Readme {
            files,
            readme,
            check,
            render,
        } => readme_mode(&files, &readme, check, render.into()),
        Command::Tests {
            files,
            output,
            target,
            prefix,
        } => tests_mode(&files, &output, &target, &prefix),
    }
}

/// Log to stderr; stdout carries rendered output.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "apidoc=warn",
        1 => "apidoc=info",
        _ => "apidoc=debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

/// extract: render to stdout; stdin when no files are given.
fn extract_mode(files: &[String], format: &str, options: render::RenderOptions) -> Result<()> {
    let renderer = render::create_renderer(format)?;
    let docs = if files.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        vec![model::ApiDoc {
            source: "-".to_string(),
            entries: extract::extract(&input),
        }]
    } else {
        load_docs(files)?
    };

    println!("{}", renderer.render(&docs, &options)?);
    Ok(())
}

/// readme: splice the markdown API section into the README.
fn readme_mode(
    files: &[String],
    readme_path: &Path,
    check: bool,
    options: render::RenderOptions,
) -> Result<()> {
    let docs = load_docs(files)?;
    let api = render::markdown::MarkdownRenderer.render(&docs, &options)?;

    match readme::sync(readme_path, &api, check)? {
        readme::Outcome::Stale => bail!("{} is out of date", readme_path.display()),
        readme::Outcome::Updated => info!(readme = %readme_path.display(), "updated"),
        readme::Outcome::Unchanged => info!(readme = %readme_path.display(), "up to date"),
    }
    Ok(())
}

/// tests: write the generated test file.
fn tests_mode(files: &[String], output: &Path, target: &str, prefix: &[PathBuf]) -> Result<()> {
    let target = testgen::create_target(target)?;
    let docs = load_docs(files)?;

    let prefixes = prefix
        .iter()
        .map(|path| {
            fs::read_to_string(path)
                .with_context(|| format!("failed to read prefix file: {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    let suite = testgen::build_suite(target.as_ref(), &docs, &prefixes);
    fs::write(output, suite).with_context(|| format!("failed to write {}", output.display()))?;

    let cases = docs.iter().map(|doc| doc.definitions().count()).sum::<usize>();
    info!(output = %output.display(), cases, "wrote tests");
    Ok(())
}

/// Expand patterns and extract every matched file, in sorted order.
fn load_docs(patterns: &[String]) -> Result<Vec<model::ApiDoc>> {
    let files = expand_globs(patterns)?;
    if files.is_empty() {
        bail!("no input files matched");
    }

    let mut docs = Vec::with_capacity(files.len());
    for path in &files {
        let doc = extract::extract_file(path)?;
        if doc.definitions().next().is_none() {
            warn!(source = %doc.source, "no documented definitions");
        }
        for block in doc.unparsed() {
            debug!(source = %doc.source, reason = %block.reason, lines = block.lines.len(), "unparsed block");
        }
        docs.push(doc);
    }
    Ok(docs)
}

/// File extensions scanned when a directory is given.
const SUPPORTED_EXTENSIONS: &[&str] = &["js", "mjs", "cjs", "ts", "rs"];

/// Expand glob patterns into a list of real file paths.
/// Also handles bare directory paths by scanning for supported file types.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        // Directory: non-recursive scan
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            files.extend(
                entries
                    .flatten()
                    .map(|entry| entry.path())
                    .filter(|p| p.is_file() && has_supported_extension(p)),
            );
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            warn!(pattern = %pattern, "no files matched");
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
}
