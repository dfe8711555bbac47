//! pwd: print the current position's path.

use crate::commands::Outcome;
use crate::error::VfsResult;
use crate::tree::Tree;

pub(super) fn run(tree: &Tree) -> VfsResult<Outcome> {
    Ok(Outcome::line(tree.path(tree.cursor())))
}
