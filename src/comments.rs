//! Comment locations: `(name path, raw text)` pairs produced alongside a schema description.
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One human comment and the name path of the element it documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentLocation {
    /// Names from the root to the documented node.
    pub path: Vec<String>,
    /// Raw comment text, delimiters and all.
    pub text: String,
}

/// Parse a JSON array of comment locations.
///
/// # Errors
///
/// Returns `Error::Json` if the content is not an array of `{path, text}` objects.
pub fn parse(content: &str) -> Result<Vec<CommentLocation>, Error> {
    return Ok(serde_json::from_str(content)?);
}

/// Read and parse a comment location file.
///
/// # Errors
///
/// Returns `Error::Io` if the file cannot be read, or `Error::Json` if it is malformed.
pub fn load(path: &Path) -> Result<Vec<CommentLocation>, Error> {
    let content = std::fs::read_to_string(path)?;
    return parse(&content);
}
