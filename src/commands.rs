//! CLI commands for doctree: outline and markdown.

use std::path::Path;

use tracing::debug;

use doctree::comments;
use doctree::config::Config;
use doctree::error::Error;
use doctree::node::Root;
use doctree::render::{render_markdown, render_outline};
use doctree::{namepath, schema};

/// Inputs shared by every rendering command.
pub struct RenderInput<'a> {
    /// Comment locations to attach before rendering.
    pub comments: Option<&'a Path>,
    /// Explicit config file; `.doctree.toml` in the working directory otherwise.
    pub config: Option<&'a Path>,
    /// Destination file; stdout when absent.
    pub output: Option<&'a Path>,
    /// Schema description to build the tree from.
    pub schema: &'a Path,
}

/// Render the tree as an indented outline.
///
/// # Errors
///
/// Returns errors from config or schema loading, comment attachment, or writing.
pub fn outline(input: &RenderInput<'_>) -> Result<(), Error> {
    let (_, root) = prepare(input)?;
    return emit(&render_outline(&root), input.output);
}

/// Render the tree as markdown, honoring the `[markdown]` config table.
///
/// # Errors
///
/// Returns errors from config or schema loading, comment attachment, or writing.
pub fn markdown(input: &RenderInput<'_>) -> Result<(), Error> {
    let (config, root) = prepare(input)?;
    return emit(&render_markdown(&root, &config.markdown_options()), input.output);
}

/// Load config and schema, build the tree, and attach comments.
///
/// # Errors
///
/// Returns the first error from any stage; an unresolved comment path aborts
/// the whole run.
fn prepare(input: &RenderInput<'_>) -> Result<(Config, Root), Error> {
    let config = match input.config {
        Some(path) => Config::load_file(path)?,
        None => Config::load(Path::new("."))?,
    };

    let description = schema::load(input.schema)?;
    let mut root = schema::build(&description, &config)?;

    if let Some(path) = input.comments {
        let locations = comments::load(path)?;
        let attached = namepath::annotate(&mut root, &locations)?;
        debug!(attached, comments = %path.display(), "comments attached");
    }

    return Ok((config, root));
}

/// Write rendered output to a file or stdout.
///
/// # Errors
///
/// Returns `Error::Io` if the destination cannot be written.
fn emit(content: &str, output: Option<&Path>) -> Result<(), Error> {
    match output {
        Some(path) => {
            std::fs::write(path, content)?;
            eprintln!("Wrote {}", path.display());
        },
        None => print!("{content}"),
    }
    return Ok(());
}
