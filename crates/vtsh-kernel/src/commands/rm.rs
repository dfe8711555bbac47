//! rm: remove files and directories.

use crate::commands::Outcome;
use crate::error::{VfsError, VfsResult};
use crate::tree::Tree;

/// `-r`/`-R` may appear anywhere in the argument list. Each remaining
/// target is resolved and removed independently; a failing target is
/// reported and the rest still run. Removal is atomic per target, not per
/// invocation.
pub(super) fn run(tree: &mut Tree, args: &[String]) -> VfsResult<Outcome> {
    let mut recursive = false;
    let mut targets = Vec::new();
    for arg in args {
        if arg == "-r" || arg == "-R" {
            recursive = true;
        } else {
            targets.push(arg);
        }
    }
    if targets.is_empty() {
        return Err(VfsError::Usage(
            "rm: missing operand, usage: rm [-r] path...".into(),
        ));
    }

    let mut outcome = Outcome::empty();
    for target in targets {
        let node = match tree.resolve(target, tree.cursor()) {
            Ok(node) => node,
            Err(e) => {
                outcome.err.push(format!("rm: {target}: {e}"));
                continue;
            }
        };
        if let Err(e) = tree.remove(node, recursive) {
            outcome.err.push(format!("rm: {target}: {e}"));
        }
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;

    fn make_tree() -> Tree {
        let mut tree = Tree::new();
        let root = tree.root();
        tree.attach_child(root, Node::file("file.txt", Some(b"data".to_vec())))
            .unwrap();
        tree.attach_child(root, Node::directory("emptydir"))
            .unwrap();
        let full = tree.attach_child(root, Node::directory("fulldir")).unwrap();
        tree.attach_child(full, Node::file("inner.txt", None))
            .unwrap();
        tree
    }

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn rm_file() {
        let mut tree = make_tree();
        let outcome = run(&mut tree, &strings(&["file.txt"])).unwrap();
        assert!(outcome.err.is_empty());
        assert!(tree.resolve("file.txt", tree.root()).is_err());
    }

    #[test]
    fn rm_empty_dir() {
        let mut tree = make_tree();
        let outcome = run(&mut tree, &strings(&["emptydir"])).unwrap();
        assert!(outcome.err.is_empty());
        assert!(tree.resolve("emptydir", tree.root()).is_err());
    }

    #[test]
    fn rm_non_empty_dir_needs_recursive() {
        let mut tree = make_tree();
        let outcome = run(&mut tree, &strings(&["fulldir"])).unwrap();
        assert_eq!(outcome.err.len(), 1);
        assert!(outcome.err[0].contains("-r"));
        // Subtree intact.
        assert!(tree.resolve("fulldir/inner.txt", tree.root()).is_ok());
    }

    #[test]
    fn rm_r_removes_recursively() {
        let mut tree = make_tree();
        let outcome = run(&mut tree, &strings(&["-r", "fulldir"])).unwrap();
        assert!(outcome.err.is_empty());
        assert!(tree.resolve("fulldir", tree.root()).is_err());
    }

    #[test]
    fn rm_flag_position_is_free() {
        let mut tree = make_tree();
        let outcome = run(&mut tree, &strings(&["fulldir", "-R"])).unwrap();
        assert!(outcome.err.is_empty());
        assert!(tree.resolve("fulldir", tree.root()).is_err());
    }

    #[test]
    fn rm_failing_target_does_not_block_others() {
        let mut tree = make_tree();
        let outcome = run(&mut tree, &strings(&["nope", "file.txt"])).unwrap();
        assert_eq!(outcome.err.len(), 1);
        assert!(outcome.err[0].starts_with("rm: nope:"));
        assert!(tree.resolve("file.txt", tree.root()).is_err());
    }

    #[test]
    fn rm_no_targets_is_usage_error() {
        let mut tree = make_tree();
        assert!(matches!(
            run(&mut tree, &strings(&["-r"])).unwrap_err(),
            VfsError::Usage(_)
        ));
        assert!(matches!(run(&mut tree, &[]).unwrap_err(), VfsError::Usage(_)));
    }

    #[test]
    fn rm_root_is_refused() {
        let mut tree = make_tree();
        let outcome = run(&mut tree, &strings(&["/"])).unwrap();
        assert_eq!(outcome.err.len(), 1);
        assert!(tree.resolve("file.txt", tree.root()).is_ok());
    }
}
