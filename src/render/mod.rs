//! Renderers over a finished tree: a plain indented outline and cross-linked markdown.
//!
//! Both walk the tree depth-first in declaration order and never mutate it,
//! so they can run concurrently against the same [`Root`].

pub mod markdown;
pub mod outline;

use crate::node::{Describable as _, Root};

/// Stylesheet placed ahead of the markdown body so the tables get borders
/// when the document is served as HTML.
const STYLESHEET: &str = "\
<style type=\"text/css\">
table { border-collapse: collapse; margin-bottom: 1em; }
th, td { border: 1px solid #c6cbd1; padding: 6px 13px; }
tr:nth-child(2n) { background-color: #f6f8fa; }
</style>

";

/// Knobs for [`render_markdown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkdownOptions {
    /// Emit the table stylesheet before the document.
    pub stylesheet: bool,
    /// Heading level of the root; files sit one level below.
    pub start_depth: usize,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        return Self {
            stylesheet: true,
            start_depth: 1,
        };
    }
}

/// Plain-text structural dump of the whole tree.
pub fn render_outline(root: &Root) -> String {
    return root.describe(0);
}

/// Markdown document for the whole tree.
pub fn render_markdown(root: &Root, options: &MarkdownOptions) -> String {
    let mut out = String::new();
    if options.stylesheet {
        out.push_str(STYLESHEET);
    }
    out.push_str(&root.describe_markdown(options.start_depth.max(1)));
    return out;
}

#[cfg(test)]
mod tests {
    use super::{MarkdownOptions, render_markdown, render_outline};
    use crate::node::{File, Message, Root};

    fn tree() -> Root {
        let mut root = Root::new("svc");
        root.files.push(File {
            messages: vec![Message {
                name: "Empty".to_string(),
                ..Message::default()
            }],
            name: "svc.proto".to_string(),
            ..File::default()
        });
        root
    }

    #[test]
    fn stylesheet_is_optional() {
        let root = tree();
        let with = render_markdown(&root, &MarkdownOptions::default());
        let without = render_markdown(
            &root,
            &MarkdownOptions {
                stylesheet: false,
                start_depth: 1,
            },
        );
        assert!(with.starts_with("<style"), "stylesheet missing: {with}");
        assert!(without.starts_with("# svc\n"), "unexpected start: {without}");
    }

    #[test]
    fn start_depth_shifts_headings() {
        let options = MarkdownOptions {
            stylesheet: false,
            start_depth: 2,
        };
        let md = render_markdown(&tree(), &options);
        assert!(md.starts_with("## svc\n"), "unexpected start: {md}");
        assert!(md.contains("### svc.proto\n"), "file heading missing: {md}");
    }

    #[test]
    fn zero_start_depth_is_clamped() {
        let options = MarkdownOptions {
            stylesheet: false,
            start_depth: 0,
        };
        assert!(render_markdown(&tree(), &options).starts_with("# svc\n"));
    }

    #[test]
    fn renderers_share_a_tree_across_threads() {
        let root = tree();
        let options = MarkdownOptions::default();
        let (outline, markdown) = std::thread::scope(|s| {
            let outline = s.spawn(|| render_outline(&root));
            let markdown = s.spawn(|| render_markdown(&root, &options));
            (outline.join().unwrap(), markdown.join().unwrap())
        });
        assert_eq!(outline, render_outline(&root));
        assert_eq!(markdown, render_markdown(&root, &options));
    }
}
