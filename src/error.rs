/// Crate-level error types for doctree diagnostics.
use std::path::PathBuf;

/// All errors in doctree carry enough context to produce a useful diagnostic
/// without a debugger. Each variant names the file, name path, or reason for failure.
#[allow(clippy::error_impl_error, reason = "crate-wide error type shared by lib and binary")]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A config file named on the command line does not exist on disk.
    #[error("config not found: {}", path.display())]
    ConfigNotFound {
        /// Path to the missing config file.
        path: PathBuf,
    },

    /// Underlying I/O error from the filesystem.
    #[error("io: {0}")]
    Io(
        /// The wrapped I/O error.
        #[from]
        std::io::Error,
    ),

    /// A schema description or comment file is not valid JSON for its shape.
    #[error("json: {0}")]
    Json(
        /// The wrapped JSON error.
        #[from]
        serde_json::Error,
    ),

    /// The schema description parsed but describes something the tree cannot hold.
    #[error("invalid schema: {reason}")]
    SchemaInvalid {
        /// Description of what is wrong.
        reason: String,
    },

    /// The schema description file does not exist on disk.
    #[error("schema not found: {}", path.display())]
    SchemaNotFound {
        /// Path to the missing schema description.
        path: PathBuf,
    },

    /// TOML deserialization failed.
    #[error("toml deserialize: {0}")]
    TomlDe(
        /// The wrapped TOML deserialization error.
        #[from]
        toml::de::Error,
    ),

    /// A comment's name path does not lead to a node in the tree. The tree and
    /// the comment locations came from different schema descriptions.
    #[error(
        "unresolved name path: `{}` (resolved up to `{}`)",
        namepath.join("."),
        resolved.join(".")
    )]
    UnresolvedPath {
        /// Names the last resolved node does have, in lookup order.
        available: Vec<String>,
        /// Full name path that was requested.
        namepath: Vec<String>,
        /// Longest prefix of `namepath` that did resolve.
        resolved: Vec<String>,
    },
}
