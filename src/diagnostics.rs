use std::fmt::Write as _;

use crate::error::Error;

/// ANSI bold, applied to heading lines.
const BOLD: &str = "\x1b[1m";
/// ANSI attribute reset.
const RESET: &str = "\x1b[0m";

/// Render an error as valid markdown with bold headings and print to stderr.
pub fn print_error(e: &Error) {
    let md = render_error(e);
    for line in md.lines() {
        if line.starts_with('#') {
            eprintln!("{BOLD}{line}{RESET}");
        } else {
            eprintln!("{line}");
        }
    }
}

/// Render an error as a structured markdown diagnostic.
///
/// Each variant produces a block with what happened and, where there is one,
/// how to fix it.
pub fn render_error(e: &Error) -> String {
    match e {
        Error::UnresolvedPath { available, namepath, resolved } => {
            render_unresolved_path(namepath, resolved, available)
        },
        Error::SchemaInvalid { reason } => render_schema_invalid(reason),
        _ => render_generic(e),
    }
}

/// Variants whose diagnostic is a fixed template around the error text.
fn render_generic(e: &Error) -> String {
    match e {
        Error::ConfigNotFound { path } => format!("\
# Error: Config Not Found

`{}` does not exist.

## Fix

Check the `--config` path, or drop the flag to use `.doctree.toml` from the
working directory.
", path.display()),

        Error::SchemaNotFound { path } => format!("\
# Error: Schema Not Found

`{}` does not exist.

## Fix

Pass the JSON schema description produced by the compiler front end:

    doctree markdown path/to/schema.json
", path.display()),

        Error::Io(e) => format!("\
# Error: I/O

{e}
"),
        Error::Json(e) => format!("\
# Error: Invalid JSON

{e}
"),
        Error::TomlDe(e) => format!("\
# Error: Invalid TOML

{e}
"),
        // Already handled in render_error, but need exhaustive match.
        _ => format!("\
# Error

{e}
"),
    }
}

/// A schema description the tree cannot hold.
fn render_schema_invalid(reason: &str) -> String {
    format!("\
# Error: Invalid Schema

{reason}

## Fix

HTTP rules accept the verbs `get`, `put`, `post`, `delete`, and `patch`.
")
}

/// Where a comment's name path stopped, and what was there instead.
fn render_unresolved_path(namepath: &[String], resolved: &[String], available: &[String]) -> String {
    let wanted = namepath.join(".");
    let mut out = format!("\
# Error: Unresolved Name Path

`{wanted}` does not name a node in the schema.
");

    let missing = namepath.get(resolved.len()).map_or("", String::as_str);
    if resolved.is_empty() {
        let _ = write!(out, "\nThe root has no child named `{missing}`.\n");
    } else {
        let _ = write!(out, "\n`{}` has no child named `{missing}`.\n", resolved.join("."));
    }

    if !available.is_empty() {
        out.push_str("\n## Available names\n\n");
        for name in available {
            let _ = writeln!(out, "- `{name}`");
        }
    }

    out.push_str("\
\n## Fix

The comments and the schema description must come from the same compiler run.
");
    out
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::render_error;
    use crate::error::Error;

    /// Owned copies of `items`.
    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn unresolved_path_names_the_gap() {
        let md = render_error(&Error::UnresolvedPath {
            available: strings(&["Point", "Shape"]),
            namepath: strings(&["locator.proto", "Pointe", "x"]),
            resolved: strings(&["locator.proto"]),
        });
        assert!(md.starts_with("# Error: Unresolved Name Path\n"));
        assert!(md.contains("`locator.proto` has no child named `Pointe`."));
        assert!(md.contains("- `Point`\n- `Shape`\n"));
    }

    #[test]
    fn unresolved_at_root() {
        let md = render_error(&Error::UnresolvedPath {
            available: Vec::new(),
            namepath: strings(&["nope.proto"]),
            resolved: Vec::new(),
        });
        assert!(md.contains("The root has no child named `nope.proto`."));
        assert!(!md.contains("## Available names"));
    }

    #[test]
    fn schema_not_found_shows_path() {
        let md = render_error(&Error::SchemaNotFound { path: PathBuf::from("api/schema.json") });
        assert!(md.contains("`api/schema.json` does not exist."));
        assert!(md.contains("## Fix"));
    }

    #[test]
    fn invalid_schema_lists_verbs() {
        let md = render_error(&Error::SchemaInvalid { reason: "unknown http verb `fetch`".to_string() });
        assert!(md.contains("unknown http verb `fetch`"));
        assert!(md.contains("`patch`"));
    }
}
