//! Name-path resolution and comment annotation.
//!
//! A name path is the join key between the structural tree and comments
//! located elsewhere: `["locator.proto", "Point", "x"]` walks file, message,
//! field through successive [`Describable::get_by_name`] calls.

use tracing::debug;

use crate::comments::CommentLocation;
use crate::error::Error;
use crate::node::{NodeId, Root};

/// Walk `namepath` from the root and return the handle it ends on.
/// An empty path addresses the root.
///
/// # Errors
///
/// Returns `Error::UnresolvedPath` at the first name with no matching child,
/// carrying the prefix that did resolve and the names that were available there.
pub fn resolve<S: AsRef<str>>(root: &Root, namepath: &[S]) -> Result<NodeId, Error> {
    let mut current = NodeId::Root;

    for (depth, name) in namepath.iter().enumerate() {
        let Some(node) = root.node(current) else {
            return Err(unresolved(namepath, depth, Vec::new()));
        };
        let describable = node.describable();
        let next = describable
            .get_by_name(name.as_ref())
            .and_then(|child| current.child(child));

        match next {
            Some(id) => current = id,
            None => {
                let available = describable.child_names().into_iter().map(String::from).collect();
                return Err(unresolved(namepath, depth, available));
            },
        }
    }

    Ok(current)
}

/// Set the description of the node at `namepath` to `scrub(text)`.
/// Nothing is modified when the path does not resolve.
///
/// # Errors
///
/// Returns `Error::UnresolvedPath` if any step of `namepath` has no match.
pub fn set_comment<S: AsRef<str>>(
    root: &mut Root,
    namepath: &[S],
    text: &str,
) -> Result<NodeId, Error> {
    let id = resolve(root, namepath)?;
    let Some(node) = root.node_mut(id) else {
        return Err(unresolved(namepath, namepath.len(), Vec::new()));
    };
    node.describable_mut().set_description(text);
    debug!(?id, path = %join(namepath), "comment attached");
    Ok(id)
}

/// Apply a batch of comments in order, stopping at the first unresolved path.
/// Returns how many comments were attached.
///
/// # Errors
///
/// Returns `Error::UnresolvedPath` for the first comment whose path has no match.
/// Comments before it in the batch have already been applied.
pub fn annotate(root: &mut Root, comments: &[CommentLocation]) -> Result<usize, Error> {
    for comment in comments {
        set_comment(root, &comment.path, &comment.text)?;
    }
    debug!(count = comments.len(), "annotation complete");
    Ok(comments.len())
}

/// Build the error for a path that stopped resolving at `depth`.
fn unresolved<S: AsRef<str>>(namepath: &[S], depth: usize, available: Vec<String>) -> Error {
    let namepath: Vec<String> = namepath.iter().map(|s| s.as_ref().to_string()).collect();
    let resolved = namepath.iter().take(depth).cloned().collect();
    Error::UnresolvedPath {
        available,
        namepath,
        resolved,
    }
}

/// Dotted form of a path for log lines.
fn join<S: AsRef<str>>(namepath: &[S]) -> String {
    namepath.iter().map(AsRef::as_ref).collect::<Vec<&str>>().join(".")
}
