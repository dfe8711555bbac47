//! vtsh-kernel: the core of vtsh.
//!
//! This crate provides:
//!
//! - **Node**: a single VFS entry, directory or file, stored in an arena
//! - **Tree**: the node arena, root, cursor, path resolution, and the
//!   one-time recursive import from a source directory
//! - **Commands**: the closed command vocabulary (`ls`, `cd`, `pwd`, `rm`,
//!   `uniq`, `whoami`, `exit`) implemented purely over Tree operations
//! - **Identity**: the injected current-user lookup used by `whoami`
//!
//! The kernel never reads interactive input, never writes to an output
//! stream, and never terminates the process. Drivers render the structured
//! [`Outcome`] returned by [`Shell::dispatch`].

pub mod commands;
pub mod error;
pub mod identity;
pub mod node;
pub mod tree;

pub use commands::{Command, Outcome, Shell};
pub use error::{VfsError, VfsResult};
pub use identity::{HostIdentity, Identity};
pub use node::{Node, NodeId, NodeKind};
pub use tree::Tree;
