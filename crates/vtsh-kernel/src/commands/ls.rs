//! ls: list directory contents.

use crate::commands::Outcome;
use crate::error::VfsResult;
use crate::node::NodeId;
use crate::tree::Tree;

/// With no arguments, list the current position's children. With
/// arguments, resolve and list each one independently; one argument's
/// failure does not block the others.
pub(super) fn run(tree: &Tree, args: &[String]) -> VfsResult<Outcome> {
    let mut outcome = Outcome::empty();
    if args.is_empty() {
        outcome.out = list_children(tree, tree.cursor());
        return Ok(outcome);
    }
    for arg in args {
        match tree.resolve(arg, tree.cursor()) {
            Ok(node) if tree.node(node).is_dir() => {
                outcome.out.extend(list_children(tree, node));
            }
            Ok(_) => outcome.out.push(format!("f {arg}")),
            Err(e) => outcome.err.push(format!("ls: {arg}: {e}")),
        }
    }
    Ok(outcome)
}

/// One `d name` or `f name` line per child, in sorted-name order
/// regardless of map iteration order.
fn list_children(tree: &Tree, dir: NodeId) -> Vec<String> {
    let Some(children) = tree.node(dir).children() else {
        return Vec::new();
    };
    let mut names: Vec<&String> = children.keys().collect();
    names.sort();
    names
        .into_iter()
        .map(|name| {
            let tag = if tree.node(children[name]).is_dir() {
                'd'
            } else {
                'f'
            };
            format!("{tag} {name}")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;

    fn make_tree() -> Tree {
        let mut tree = Tree::new();
        let root = tree.root();
        tree.attach_child(root, Node::file("a.txt", Some(b"a".to_vec())))
            .unwrap();
        let sub = tree.attach_child(root, Node::directory("sub")).unwrap();
        tree.attach_child(sub, Node::file("b.txt", None)).unwrap();
        tree
    }

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn ls_no_args_lists_cursor_sorted() {
        let tree = make_tree();
        let outcome = run(&tree, &[]).unwrap();
        assert_eq!(outcome.out, vec!["f a.txt", "d sub"]);
        assert!(outcome.err.is_empty());
    }

    #[test]
    fn ls_path_argument() {
        let tree = make_tree();
        let outcome = run(&tree, &strings(&["sub"])).unwrap();
        assert_eq!(outcome.out, vec!["f b.txt"]);
    }

    #[test]
    fn ls_file_argument_reports_the_file() {
        let tree = make_tree();
        let outcome = run(&tree, &strings(&["a.txt"])).unwrap();
        assert_eq!(outcome.out, vec!["f a.txt"]);
    }

    #[test]
    fn ls_empty_directory_emits_nothing() {
        let mut tree = Tree::new();
        let root = tree.root();
        tree.attach_child(root, Node::directory("empty")).unwrap();
        let outcome = run(&tree, &strings(&["empty"])).unwrap();
        assert!(outcome.out.is_empty());
        assert!(outcome.err.is_empty());
    }

    #[test]
    fn ls_bad_argument_does_not_block_others() {
        let tree = make_tree();
        let outcome = run(&tree, &strings(&["nope", "sub"])).unwrap();
        assert_eq!(outcome.out, vec!["f b.txt"]);
        assert_eq!(outcome.err.len(), 1);
        assert!(outcome.err[0].starts_with("ls: nope:"));
    }

    #[test]
    fn ls_is_idempotent() {
        let tree = make_tree();
        let first = run(&tree, &[]).unwrap();
        let second = run(&tree, &[]).unwrap();
        assert_eq!(first, second);
    }
}
