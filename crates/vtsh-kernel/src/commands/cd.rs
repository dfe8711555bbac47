//! cd: change the current position.

use crate::commands::Outcome;
use crate::error::{VfsError, VfsResult};
use crate::tree::Tree;

/// No arguments resets the cursor to root. One argument resolves and
/// moves only onto a directory; any failure leaves the cursor unchanged.
pub(super) fn run(tree: &mut Tree, args: &[String]) -> VfsResult<Outcome> {
    match args {
        [] => {
            let root = tree.root();
            tree.set_cursor(root);
            Ok(Outcome::empty())
        }
        [path] => {
            let target = tree.resolve(path, tree.cursor())?;
            if tree.node(target).is_dir() {
                tree.set_cursor(target);
                Ok(Outcome::empty())
            } else {
                Err(VfsError::NotADirectory(path.clone()))
            }
        }
        _ => Err(VfsError::Usage(
            "cd: too many arguments, usage: cd [directory]".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;

    fn make_tree() -> Tree {
        let mut tree = Tree::new();
        let root = tree.root();
        let sub = tree.attach_child(root, Node::directory("sub")).unwrap();
        tree.attach_child(sub, Node::directory("inner")).unwrap();
        tree.attach_child(root, Node::file("file.txt", None))
            .unwrap();
        tree
    }

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn cd_into_subdirectory() {
        let mut tree = make_tree();
        run(&mut tree, &strings(&["sub"])).unwrap();
        assert_eq!(tree.path(tree.cursor()), "/sub");
    }

    #[test]
    fn cd_no_args_resets_to_root() {
        let mut tree = make_tree();
        run(&mut tree, &strings(&["sub/inner"])).unwrap();
        run(&mut tree, &[]).unwrap();
        assert_eq!(tree.cursor(), tree.root());
    }

    #[test]
    fn cd_dotdot_moves_up() {
        let mut tree = make_tree();
        run(&mut tree, &strings(&["sub"])).unwrap();
        run(&mut tree, &strings(&[".."])).unwrap();
        assert_eq!(tree.cursor(), tree.root());
    }

    #[test]
    fn cd_dotdot_at_root_stays_put() {
        let mut tree = make_tree();
        run(&mut tree, &strings(&[".."])).unwrap();
        assert_eq!(tree.cursor(), tree.root());
    }

    #[test]
    fn cd_onto_file_fails_and_cursor_holds() {
        let mut tree = make_tree();
        let err = run(&mut tree, &strings(&["file.txt"])).unwrap_err();
        assert_eq!(err, VfsError::NotADirectory("file.txt".into()));
        assert_eq!(tree.cursor(), tree.root());
    }

    #[test]
    fn cd_missing_path_fails_and_cursor_holds() {
        let mut tree = make_tree();
        run(&mut tree, &strings(&["sub"])).unwrap();
        let before = tree.cursor();
        let err = run(&mut tree, &strings(&["nope"])).unwrap_err();
        assert_eq!(err, VfsError::PathNotFound("nope".into()));
        assert_eq!(tree.cursor(), before);
    }

    #[test]
    fn cd_two_args_is_usage_error() {
        let mut tree = make_tree();
        let err = run(&mut tree, &strings(&["sub", "inner"])).unwrap_err();
        assert!(matches!(err, VfsError::Usage(_)));
    }
}
