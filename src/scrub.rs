//! Comment normalization: raw protobuf comment text in, storable prose out.

use std::sync::LazyLock;

use regex::Regex;

/// Runs of `//`, `///`, `//!`, `/*` and `/**` openers at the start of a line.
#[allow(clippy::expect_used, reason = "literal pattern, exercised by the tests below")]
static LEADING_MARKERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\s*(?:/{2,}!?|/\*+))+ ?").expect("valid regex"));

/// A `*/` closer (possibly `**/`) at the end of a line.
#[allow(clippy::expect_used, reason = "literal pattern, exercised by the tests below")]
static TRAILING_CLOSER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\*+/\s*$").expect("valid regex"));

/// The `*` gutter that block comments carry down their left edge.
#[allow(clippy::expect_used, reason = "literal pattern, exercised by the tests below")]
static BLOCK_GUTTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\*+ ?").expect("valid regex"));

/// Normalize raw comment text into clean description prose.
///
/// Strips comment delimiters, the `*` gutter of block comments, trailing
/// whitespace, common indentation, and surrounding blank lines. Text that is
/// already clean comes back unchanged, so calling this twice is the same as
/// calling it once.
pub fn scrub(raw: &str) -> String {
    let in_block = raw.lines().any(|l| l.trim_start().starts_with("/*"));

    let stripped: Vec<String> = raw
        .lines()
        .map(|line| strip_comment_markers(line, in_block))
        .collect();

    let unindented = unindent(&stripped);
    let first = unindented.iter().position(|l| !l.is_empty());
    let last = unindented.iter().rposition(|l| !l.is_empty());

    match (first, last) {
        (Some(first), Some(last)) => unindented
            .get(first..=last)
            .map(|lines| lines.join("\n"))
            .unwrap_or_default(),
        _ => String::new(),
    }
}

/// Remove delimiters from one line, keeping whatever indentation follows them.
fn strip_comment_markers(line: &str, in_block: bool) -> String {
    let without_closer = TRAILING_CLOSER.replace(line, "");
    let mut rest: &str = &without_closer;

    if let Some(found) = LEADING_MARKERS.find(rest) {
        rest = rest.get(found.end()..).unwrap_or("");
    } else if let Some(found) = BLOCK_GUTTER.find(rest).filter(|_| in_block) {
        rest = rest.get(found.end()..).unwrap_or("");
    }

    // A gutter line may carry its own markers: ` * // note`.
    while let Some(found) = LEADING_MARKERS.find(rest) {
        if found.end() == 0 {
            break;
        }
        rest = rest.get(found.end()..).unwrap_or("");
    }
    rest.trim_end().to_string()
}

/// Remove the indentation shared by every non-blank line.
fn unindent(lines: &[String]) -> Vec<String> {
    let min_indent = lines
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.chars().take_while(|c| c.is_whitespace()).count())
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(|l| {
            if l.trim().is_empty() {
                return String::new();
            }
            l.chars().skip(min_indent).collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::scrub;

    #[test]
    fn line_comments() {
        assert_eq!(scrub("// A 2D point.\n// In pixels."), "A 2D point.\nIn pixels.");
    }

    #[test]
    fn protoc_leading_space() {
        // protoc hands over comment bodies with the `//` already removed.
        assert_eq!(scrub(" A 2D point.\n"), "A 2D point.");
    }

    #[test]
    fn block_comment_with_gutter() {
        let raw = "/**\n * Locates things.\n *\n * Fast.\n */";
        assert_eq!(scrub(raw), "Locates things.\n\nFast.");
    }

    #[test]
    fn keeps_relative_indentation() {
        let raw = "// Example:\n//     let x = 1;";
        assert_eq!(scrub(raw), "Example:\n    let x = 1;");
    }

    #[test]
    fn clean_text_is_untouched() {
        let clean = "Lists things.\n* one\n* two";
        assert_eq!(scrub(clean), clean);
    }

    #[test]
    fn idempotent() {
        for raw in [
            "  /* Outer */\n  // // doubled marker\n",
            "/*\n * // code\n */",
            "/**\n * /* nested opener\n * * bullet\n */",
        ] {
            let once = scrub(raw);
            assert_eq!(scrub(&once), once, "raw: {raw:?}");
        }
    }

    #[test]
    fn markers_inside_block_gutter() {
        assert_eq!(scrub("/*\n * // code\n */"), "code");
    }

    #[test]
    fn empty_and_blank() {
        assert_eq!(scrub(""), "");
        assert_eq!(scrub("  \n//\n  "), "");
    }
}
