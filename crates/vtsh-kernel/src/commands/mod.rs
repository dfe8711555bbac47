//! The command set: the fixed vocabulary the driver dispatches into.
//!
//! Commands are a closed enumeration, not an open string-keyed registry:
//! [`Command::parse`] maps a name to a variant and rejects anything else
//! with `UnknownCommand` before any per-command logic runs. Each command is
//! implemented purely in terms of [`Tree`] operations and returns a
//! structured [`Outcome`]; rendering and process termination belong to the
//! driver.

mod cd;
mod ls;
mod pwd;
mod rm;
mod uniq;
mod whoami;

use crate::error::{VfsError, VfsResult};
use crate::identity::{HostIdentity, Identity};
use crate::tree::Tree;

/// The closed command vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Ls,
    Cd,
    Pwd,
    Rm,
    Uniq,
    Whoami,
    Exit,
}

impl Command {
    /// Map a command name to its variant.
    pub fn parse(name: &str) -> VfsResult<Self> {
        match name {
            "ls" => Ok(Command::Ls),
            "cd" => Ok(Command::Cd),
            "pwd" => Ok(Command::Pwd),
            "rm" => Ok(Command::Rm),
            "uniq" => Ok(Command::Uniq),
            "whoami" => Ok(Command::Whoami),
            "exit" => Ok(Command::Exit),
            other => Err(VfsError::UnknownCommand(other.to_string())),
        }
    }
}

/// Structured result of one dispatch.
///
/// `out` is the payload, `err` carries per-target diagnostics for commands
/// that keep going after an individual target fails (`ls`, `rm`), and
/// `terminate` is the sole signal the driver uses to stop its read loop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Payload lines, in emission order.
    pub out: Vec<String>,
    /// Per-target diagnostics that did not abort the command.
    pub err: Vec<String>,
    /// True when the driver should stop reading input.
    pub terminate: bool,
}

impl Outcome {
    /// An empty success.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A success carrying payload lines.
    pub fn lines(out: Vec<String>) -> Self {
        Self {
            out,
            ..Self::default()
        }
    }

    /// A success carrying a single payload line.
    pub fn line(out: impl Into<String>) -> Self {
        Self::lines(vec![out.into()])
    }

    /// The terminate signal returned by `exit`.
    pub fn terminate() -> Self {
        Self {
            terminate: true,
            ..Self::default()
        }
    }
}

/// The command set bound to a tree and an identity capability.
pub struct Shell {
    tree: Tree,
    identity: Box<dyn Identity>,
}

impl Shell {
    /// Create a shell over a tree using the host identity.
    pub fn new(tree: Tree) -> Self {
        Self::with_identity(tree, Box::new(HostIdentity))
    }

    /// Create a shell with an injected identity (tests substitute a fixed
    /// name here).
    pub fn with_identity(tree: Tree, identity: Box<dyn Identity>) -> Self {
        Self { tree, identity }
    }

    /// The underlying tree.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Dispatch one command by name.
    ///
    /// Errors returned here are command-level outcomes for the driver to
    /// render; they never abort its read loop.
    pub fn dispatch(&mut self, name: &str, args: &[String]) -> VfsResult<Outcome> {
        match Command::parse(name)? {
            Command::Ls => ls::run(&self.tree, args),
            Command::Cd => cd::run(&mut self.tree, args),
            Command::Pwd => pwd::run(&self.tree),
            Command::Rm => rm::run(&mut self.tree, args),
            Command::Uniq => uniq::run(&self.tree, args),
            Command::Whoami => whoami::run(self.identity.as_ref()),
            Command::Exit => Ok(Outcome::terminate()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;

    #[test]
    fn parse_known_names() {
        assert_eq!(Command::parse("ls").unwrap(), Command::Ls);
        assert_eq!(Command::parse("exit").unwrap(), Command::Exit);
    }

    #[test]
    fn parse_unknown_name_is_rejected() {
        let err = Command::parse("frobnicate").unwrap_err();
        assert_eq!(err, VfsError::UnknownCommand("frobnicate".into()));
    }

    #[test]
    fn dispatch_unknown_command() {
        let mut shell = Shell::new(Tree::new());
        let err = shell.dispatch("mkdir", &[]).unwrap_err();
        assert!(matches!(err, VfsError::UnknownCommand(_)));
    }

    #[test]
    fn exit_signals_terminate_only() {
        let mut shell = Shell::new(Tree::new());
        let outcome = shell
            .dispatch("exit", &["ignored".to_string()])
            .unwrap();
        assert!(outcome.terminate);
        assert!(outcome.out.is_empty());
    }

    #[test]
    fn dispatch_runs_over_tree() {
        let mut tree = Tree::new();
        let root = tree.root();
        tree.attach_child(root, Node::file("a.txt", None)).unwrap();
        let mut shell = Shell::new(tree);
        let outcome = shell.dispatch("ls", &[]).unwrap();
        assert_eq!(outcome.out, vec!["f a.txt"]);
    }
}
