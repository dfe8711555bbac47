//! Nodes of the virtual tree.
//!
//! A node is one entry in the namespace: a directory or a file. The two
//! kinds are a tagged variant so a directory holding content or a file
//! holding children is unrepresentable. Nodes live in the [`Tree`](crate::Tree)
//! arena and refer to each other by [`NodeId`], a stable index; the parent
//! link is a plain non-owning id, so the back-reference cycle of a naive
//! pointer design never exists here.

use std::collections::HashMap;

/// Stable handle to a node in the tree arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// The directory-or-file payload of a node.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// A directory: child name to child id. Iteration order is irrelevant;
    /// listings are sorted at display time.
    Directory { children: HashMap<String, NodeId> },
    /// A file. `None` content stands for a zero-length or unread file.
    File { content: Option<Vec<u8>> },
}

/// A single VFS entry.
#[derive(Debug, Clone)]
pub struct Node {
    /// Path segment this node is addressed by within its parent.
    /// The root's name is the empty string and is never printed.
    pub name: String,
    /// Non-owning back-reference; `None` only for the root.
    pub parent: Option<NodeId>,
    /// Directory or file payload.
    pub kind: NodeKind,
}

impl Node {
    /// Create an unattached directory node.
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            kind: NodeKind::Directory {
                children: HashMap::new(),
            },
        }
    }

    /// Create an unattached file node.
    pub fn file(name: impl Into<String>, content: Option<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            kind: NodeKind::File { content },
        }
    }

    /// True if this node is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    /// Child map, if this node is a directory.
    pub fn children(&self) -> Option<&HashMap<String, NodeId>> {
        match &self.kind {
            NodeKind::Directory { children } => Some(children),
            NodeKind::File { .. } => None,
        }
    }

    /// File content, if this node is a file with content.
    pub fn content(&self) -> Option<&[u8]> {
        match &self.kind {
            NodeKind::File { content } => content.as_deref(),
            NodeKind::Directory { .. } => None,
        }
    }
}
