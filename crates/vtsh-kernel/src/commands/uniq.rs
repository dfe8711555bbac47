//! uniq: deduplicated text display.

use std::collections::HashSet;

use crate::commands::Outcome;
use crate::error::{VfsError, VfsResult};
use crate::tree::Tree;

/// Emit each line of a file whose trimmed form has not been seen before,
/// in first-occurrence order. The dedup key is the trimmed line; the
/// emitted line is the original, untrimmed one. The file must be an
/// immediate child of the current position.
pub(super) fn run(tree: &Tree, args: &[String]) -> VfsResult<Outcome> {
    let [name] = args else {
        return Err(VfsError::Usage(
            "uniq: expected exactly one file, usage: uniq file".into(),
        ));
    };

    let cursor = tree.cursor();
    let children = tree
        .node(cursor)
        .children()
        .ok_or_else(|| VfsError::NotADirectory(tree.path(cursor)))?;
    let id = *children
        .get(name.as_str())
        .ok_or_else(|| VfsError::PathNotFound(name.clone()))?;
    let node = tree.node(id);
    if node.is_dir() {
        return Err(VfsError::NotAFile(name.clone()));
    }

    // Absent content stands for a zero-length file: empty output.
    let bytes = node.content().unwrap_or_default();
    let text = std::str::from_utf8(bytes).map_err(|_| VfsError::NotText(name.clone()))?;

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for line in text.lines() {
        if seen.insert(line.trim().to_string()) {
            out.push(line.to_string());
        }
    }
    Ok(Outcome::lines(out))
}
