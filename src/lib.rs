//! Documentation tree for Protocol Buffer schemas.
//!
//! A schema description is built into a typed tree of files, messages, enums,
//! services, methods, and HTTP bindings. Comments located by name path are
//! scrubbed and attached to tree nodes, and the tree renders as an indented
//! outline or as cross-linked markdown.

pub mod comments;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod namepath;
pub mod node;
pub mod render;
pub mod schema;
pub mod scrub;
pub mod types;

pub use crate::comments::CommentLocation;
pub use crate::config::Config;
pub use crate::error::Error;
pub use crate::namepath::{annotate, resolve, set_comment};
pub use crate::node::{Child, Describable, NodeId, NodeMut, NodeRef, Root};
pub use crate::render::{MarkdownOptions, render_markdown, render_outline};
pub use crate::schema::{SchemaDescription, build};
pub use crate::scrub::scrub;
